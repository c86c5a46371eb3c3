//! `audit` command: show the most recent store mutations

use crate::audit::AuditLogger;
use crate::error::KathaResult;

/// Render the last `recent` audit entries, oldest first
pub fn format_audit_log(logger: &AuditLogger, recent: usize) -> KathaResult<String> {
    let entries = logger.read_recent(recent)?;

    if entries.is_empty() {
        return Ok("No audit entries.\n".to_string());
    }

    let mut output = String::new();
    for entry in &entries {
        output.push_str(&entry.format_human_readable());
        output.push('\n');
    }
    output.push_str(&format!(
        "\nShowing {} of {} entries\n",
        entries.len(),
        logger.entry_count()?
    ));

    Ok(output)
}

pub fn handle_audit_command(logger: &AuditLogger, recent: usize) -> KathaResult<()> {
    print!("{}", format_audit_log(logger, recent)?);
    Ok(())
}
