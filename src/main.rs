mod backlog;
mod config;
mod document;
mod importer;
mod jira_client;
mod models;
mod payload;

use std::process::ExitCode;

use config::JiraConfig;
use importer::{run_import, Pacing};
use jira_client::JiraClient;

#[tokio::main]
async fn main() -> ExitCode {
    dotenv::dotenv().ok();

    let config = match JiraConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Error: {}", e);
            eprintln!("Please create a .env file with these variables. See .env.example for reference.");
            return ExitCode::FAILURE;
        }
    };

    let epics = backlog::backlog();

    println!("🚀 Starting Jira Board Setup for Visual Workflow Builder MVP");
    println!("📍 Project: {}", config.project_key);
    println!("🌐 Domain: {}", config.domain);
    println!(
        "📊 Setting up {} epics with full detail (stories + tasks)\n",
        epics.len()
    );

    let board_url = config.board_url();
    let client = JiraClient::new(config);
    let summary = run_import(&client, &epics, &Pacing::default()).await;

    println!("\n🎉 Jira Board Setup Complete!");
    println!("\n📊 Summary:");
    println!(
        "   - {}/{} Epics created",
        summary.epics_created, summary.epics_attempted
    );
    println!(
        "   - {}/{} Stories created",
        summary.stories_created, summary.stories_attempted
    );
    println!(
        "   - {}/{} Tasks created",
        summary.tasks_created, summary.tasks_attempted
    );
    println!("\n🔗 View your board at: {}", board_url);

    ExitCode::SUCCESS
}
