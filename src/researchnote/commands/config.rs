use crate::commands::CmdResult;
use crate::config::ResearchNoteConfig;
use crate::error::Result;

/// Reports the effective configuration.
pub fn run(config: &ResearchNoteConfig) -> Result<CmdResult> {
    Ok(CmdResult::default().with_config(config.clone()))
}
