use anyhow::Result;
use harvest::api::Crud;
use harvest::{Harvest, SessionOptions};

#[tokio::main]
async fn main() -> Result<()> {
    let subdomain = std::env::var("HARVEST_SUBDOMAIN")?;
    let username = std::env::var("HARVEST_USERNAME")?;
    let password = std::env::var("HARVEST_PASSWORD")?;

    let harvest = Harvest::new(&subdomain, &username, &password, SessionOptions::default())?;

    let me = harvest.account().who_am_i().await?;
    println!("Signed in as {} {} ({})", me.user.first_name, me.user.last_name, me.company.name);

    let today = harvest.time().today(None).await?;
    println!("Timesheet for {}:", today.for_day);
    for entry in &today.day_entries {
        println!(
            "  {:>5.2}h  {} / {}  {}",
            entry.hours,
            entry.project.as_deref().unwrap_or("?"),
            entry.task.as_deref().unwrap_or("?"),
            if entry.timer_running() { "(running)" } else { "" },
        );
    }

    println!("Trackable projects:");
    for project in &today.projects {
        println!("  [{}] {}", project.id, project.name);
    }

    let clients = harvest.clients().list().await?;
    println!("{} clients on the account", clients.len());

    Ok(())
}
