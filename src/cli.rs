// src/cli.rs
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::info;

use crate::core::config_manager::CONFIG_FILE;
use crate::core::{ConfigManager, ServiceClient};
use crate::screens::results::build_cards;
use crate::types::MatchParams;
use crate::web::start_web_server;

#[derive(Parser)]
#[command(name = "cv-console")]
#[command(about = "Admin console for the CV matching platform")]
pub struct ConsoleCli {
    #[command(subcommand)]
    pub command: Option<ConsoleCommand>,

    /// Base URL of the matching API
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Port the console listens on
    #[arg(long, global = true)]
    pub port: Option<u16>,

    /// Configuration file
    #[arg(long, global = true, default_value = CONFIG_FILE)]
    pub config: PathBuf,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum ConsoleCommand {
    /// Start the web console (default)
    Serve,
    /// Print the upstream health report
    Health,
    /// Print aggregate statistics
    Stats {
        /// Print skill analytics instead
        #[arg(long)]
        skills: bool,
    },
    /// Rank job offers for one candidate
    Match {
        candidate_id: String,
        /// Number of offers; defaults to the configured `default_top_k`
        #[arg(long)]
        top_k: Option<u32>,
        #[arg(long, default_value_t = 0.0)]
        min_score: f64,
        /// Skip AI-assisted scoring
        #[arg(long)]
        no_ai: bool,
    },
}

impl ConsoleCli {
    /// Layered configuration with the flags of this invocation on top
    pub fn resolve_config(&self) -> Result<ConfigManager> {
        let config = ConfigManager::load_with(&self.config, |key| std::env::var(key).ok())
            .with_context(|| format!("Failed to load configuration from {}", self.config.display()))?;
        Ok(config.with_overrides(self.api_url.clone(), self.port))
    }
}

pub async fn handle_console_command(cli: ConsoleCli, config: ConfigManager) -> Result<()> {
    match cli.command.unwrap_or(ConsoleCommand::Serve) {
        ConsoleCommand::Serve => start_web_server(config).await,
        ConsoleCommand::Health => handle_health(&client_for(&config)?).await,
        ConsoleCommand::Stats { skills } => handle_stats(&client_for(&config)?, skills).await,
        ConsoleCommand::Match {
            candidate_id,
            top_k,
            min_score,
            no_ai,
        } => {
            let top_k = top_k.unwrap_or(config.matching.default_top_k);
            let params = MatchParams::new(top_k, min_score, !no_ai);
            handle_match(&client_for(&config)?, &candidate_id, &params).await
        }
    }
}

fn client_for(config: &ConfigManager) -> Result<ServiceClient> {
    ServiceClient::new(config.api.base_url.clone(), config.api.timeout_seconds)
}

async fn handle_health(client: &ServiceClient) -> Result<()> {
    let report = client
        .health()
        .await
        .with_context(|| format!("Matching API at {} is not reachable", client.base_url()))?;
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

async fn handle_stats(client: &ServiceClient, skills: bool) -> Result<()> {
    if skills {
        let analytics = client
            .get_skill_analytics()
            .await
            .context("Failed to fetch skill analytics")?;
        println!("Unique skills: {}", analytics.unique_skills_count);
        for skill in &analytics.top_skills {
            println!("  {:<30} {:>6}", skill.name, skill.count);
        }
        return Ok(());
    }

    let payload = client.get_stats().await.context("Failed to fetch statistics")?;
    let stats = &payload.statistics;
    println!(
        "Candidates: {} ({} active)",
        stats.total_candidates, stats.active_candidates
    );
    println!("Job offers: {} ({} active)", stats.total_offers, stats.active_offers);
    println!("Matches:    {}", stats.total_matches);
    println!(
        "Average score: {}",
        crate::screens::dashboard::format_average_score(stats.average_match_score)
    );
    Ok(())
}

async fn handle_match(client: &ServiceClient, candidate_id: &str, params: &MatchParams) -> Result<()> {
    info!(
        "Matching candidate {} (top_k={}, min_score={}, use_ai={})",
        candidate_id, params.top_k, params.min_score, params.use_ai
    );
    let response = client
        .match_candidate(candidate_id, params)
        .await
        .with_context(|| format!("Matching failed for candidate {}", candidate_id))?;

    let cards = build_cards(&response.matches);
    if cards.is_empty() {
        println!("No matching job offers found");
        return Ok(());
    }

    println!("{:<8} {:>6}  {:<40} {}", "TIER", "SCORE", "TITLE", "OFFER");
    for (card, record) in cards.iter().zip(&response.matches) {
        println!(
            "{:<8} {:>6}  {:<40} {}",
            card.score_tier.css_class(),
            card.score_label,
            card.title,
            record.offer_id.as_deref().unwrap_or("-")
        );
    }
    println!(
        "{} match(es) via {} in {:.0} ms",
        response.total_matches, response.algorithm_used, response.processing_time_ms
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_subcommand_means_serve() {
        let cli = ConsoleCli::try_parse_from(["cv-console"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.config, PathBuf::from(CONFIG_FILE));
    }

    #[test]
    fn match_flags_parse() {
        let cli = ConsoleCli::try_parse_from([
            "cv-console", "match", "C1", "--top-k", "7", "--min-score", "0.4", "--no-ai",
        ])
        .unwrap();
        assert_eq!(
            cli.command,
            Some(ConsoleCommand::Match {
                candidate_id: "C1".to_string(),
                top_k: Some(7),
                min_score: 0.4,
                no_ai: true,
            })
        );
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli =
            ConsoleCli::try_parse_from(["cv-console", "stats", "--skills", "--port", "4100"]).unwrap();
        assert_eq!(cli.port, Some(4100));
        assert_eq!(cli.command, Some(ConsoleCommand::Stats { skills: true }));
    }

    #[test]
    fn flags_override_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        std::fs::write(&path, "local:\n  port: 3900\n").unwrap();

        let cli = ConsoleCli::try_parse_from([
            "cv-console",
            "--config",
            path.to_str().unwrap(),
            "--api-url",
            "http://api.test:9000",
        ])
        .unwrap();
        let config = cli.resolve_config().unwrap();
        assert_eq!(config.api.base_url, "http://api.test:9000");
    }

    #[test]
    fn match_without_top_k_leaves_it_to_config() {
        let cli = ConsoleCli::try_parse_from(["cv-console", "match", "C1"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(ConsoleCommand::Match { top_k: None, .. })
        ));
    }
}
