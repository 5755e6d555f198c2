use chrono::{Datelike, NaiveDate};

use crate::model::ReportFilter;

fn yyyymmdd(date: NaiveDate) -> String {
    date.format("%Y%m%d").to_string()
}

pub(crate) fn rate_limit_status_path() -> String {
    "/account/rate_limit_status".to_owned()
}

pub(crate) fn who_am_i_path() -> String {
    "/account/who_am_i".to_owned()
}

pub(crate) fn clients_path() -> String {
    "/clients".to_owned()
}

pub(crate) fn contacts_path() -> String {
    "/contacts".to_owned()
}

pub(crate) fn client_contacts_path(client_id: i64) -> String {
    format!("/clients/{}/contacts", client_id)
}

pub(crate) fn projects_path() -> String {
    "/projects".to_owned()
}

pub(crate) fn project_create_task_path(project_id: i64) -> String {
    format!(
        "/projects/{}/task_assignments/add_with_create_new_task",
        project_id
    )
}

pub(crate) fn tasks_path() -> String {
    "/tasks".to_owned()
}

pub(crate) fn users_path() -> String {
    "/people".to_owned()
}

pub(crate) fn user_reset_password_path(user_id: i64) -> String {
    format!("/people/{}/reset_password", user_id)
}

pub(crate) fn task_assignments_path(project_id: i64) -> String {
    format!("/projects/{}/task_assignments", project_id)
}

pub(crate) fn user_assignments_path(project_id: i64) -> String {
    format!("/projects/{}/user_assignments", project_id)
}

pub(crate) fn expense_categories_path() -> String {
    "/expense_categories".to_owned()
}

pub(crate) fn expenses_path(of_user: Option<i64>) -> String {
    match of_user {
        Some(user_id) => {
            let url = "/expenses?".to_owned();
            let len = url.len();
            form_urlencoded::Serializer::for_suffix(url, len)
                .append_pair("of_user", &user_id.to_string())
                .finish()
        }
        None => "/expenses".to_owned(),
    }
}

pub(crate) fn daily_path(of_user: Option<i64>) -> String {
    match of_user {
        Some(user_id) => {
            let url = "/daily?".to_owned();
            let len = url.len();
            form_urlencoded::Serializer::for_suffix(url, len)
                .append_pair("of_user", &user_id.to_string())
                .finish()
        }
        None => "/daily".to_owned(),
    }
}

/// Day view path: the classic API addresses a day by ordinal within its year.
pub(crate) fn daily_day_path(date: NaiveDate, of_user: Option<i64>) -> String {
    let url = format!("/daily/{}/{}", date.ordinal(), date.year());
    match of_user {
        Some(user_id) => {
            let url = format!("{}?", url);
            let len = url.len();
            form_urlencoded::Serializer::for_suffix(url, len)
                .append_pair("of_user", &user_id.to_string())
                .finish()
        }
        None => url,
    }
}

pub(crate) fn daily_show_path(id: i64) -> String {
    format!("/daily/show/{}", id)
}

pub(crate) fn daily_add_path() -> String {
    "/daily/add".to_owned()
}

pub(crate) fn daily_update_path(id: i64) -> String {
    format!("/daily/update/{}", id)
}

pub(crate) fn daily_delete_path(id: i64) -> String {
    format!("/daily/delete/{}", id)
}

pub(crate) fn daily_timer_path(id: i64) -> String {
    format!("/daily/timer/{}", id)
}

fn report_path(prefix: String, from: NaiveDate, to: NaiveDate, filter: &ReportFilter) -> String {
    let url = format!("{}?", prefix);
    let len = url.len();
    let mut serializer = form_urlencoded::Serializer::for_suffix(url, len);
    serializer
        .append_pair("from", &yyyymmdd(from))
        .append_pair("to", &yyyymmdd(to));

    if let Some(user_id) = filter.user {
        serializer.append_pair("user_id", &user_id.to_string());
    }
    if let Some(project_id) = filter.project {
        serializer.append_pair("project_id", &project_id.to_string());
    }
    if let Some(billed) = filter.billed {
        let state = if billed { "yes" } else { "no" };
        serializer.append_pair("billable", state);
    }

    serializer.finish()
}

pub(crate) fn project_entries_path(
    project_id: i64,
    from: NaiveDate,
    to: NaiveDate,
    filter: &ReportFilter,
) -> String {
    report_path(format!("/projects/{}/entries", project_id), from, to, filter)
}

pub(crate) fn user_entries_path(
    user_id: i64,
    from: NaiveDate,
    to: NaiveDate,
    filter: &ReportFilter,
) -> String {
    report_path(format!("/people/{}/entries", user_id), from, to, filter)
}

pub(crate) fn project_expenses_path(
    project_id: i64,
    from: NaiveDate,
    to: NaiveDate,
    filter: &ReportFilter,
) -> String {
    report_path(format!("/projects/{}/expenses", project_id), from, to, filter)
}

pub(crate) fn user_expenses_path(
    user_id: i64,
    from: NaiveDate,
    to: NaiveDate,
    filter: &ReportFilter,
) -> String {
    report_path(format!("/people/{}/expenses", user_id), from, to, filter)
}

#[cfg(test)]
mod test {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_daily_day_path_uses_ordinal() {
        assert_eq!(daily_day_path(date(2017, 6, 19), None), "/daily/170/2017");
        assert_eq!(
            daily_day_path(date(2017, 6, 19), Some(7)),
            "/daily/170/2017?of_user=7"
        );
        // Jan 1 is day 1, not day 0.
        assert_eq!(daily_day_path(date(2020, 1, 1), None), "/daily/1/2020");
    }

    #[test]
    fn test_report_path_query() {
        let path = project_entries_path(
            5,
            date(2017, 6, 1),
            date(2017, 6, 30),
            &ReportFilter::for_user(12),
        );
        assert_eq!(path, "/projects/5/entries?from=20170601&to=20170630&user_id=12");
    }

    #[test]
    fn test_report_path_billed_filter() {
        let filter = ReportFilter {
            billed: Some(true),
            ..Default::default()
        };
        let path = user_expenses_path(9, date(2017, 1, 2), date(2017, 1, 8), &filter);
        assert_eq!(path, "/people/9/expenses?from=20170102&to=20170108&billable=yes");
    }
}
