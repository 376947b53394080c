//! Integration checklist for the Firefly III automation assets.
//!
//! The checklist only inspects the filesystem and prints guidance. It never
//! modifies files and never contacts the automation microservice it
//! describes.

use std::io::Write;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{info, instrument, warn};

use crate::error::Result;

/// File whose presence identifies the Firefly III base directory.
pub const MARKER_FILE: &str = "artisan";

/// Integration assets and templates that must be installed.
pub const REQUIRED_FILES: [&str; 3] = [
    "public/v1/js/ff/automation/automation.js",
    "public/v1/css/automation.css",
    "resources/views/accounts/show.twig",
];

const RULE_WIDTH: usize = 60;

/// Presence of a single required file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileCheck {
    pub path: String,
    pub present: bool,
}

/// Outcome of the directory and file-presence checks.
///
/// `files` is empty when the marker is missing, since file presence is only
/// checked from the right base directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChecklistReport {
    pub root: PathBuf,
    pub marker_present: bool,
    pub files: Vec<FileCheck>,
}

#[derive(Serialize)]
struct JsonReport<'a> {
    #[serde(flatten)]
    report: &'a ChecklistReport,
    missing: Vec<&'a str>,
    success: bool,
}

impl ChecklistReport {
    /// Required files that were checked and not found, in checklist order.
    pub fn missing_files(&self) -> Vec<&str> {
        self.files
            .iter()
            .filter(|check| !check.present)
            .map(|check| check.path.as_str())
            .collect()
    }

    pub fn is_success(&self) -> bool {
        self.marker_present
            && self.files.len() == REQUIRED_FILES.len()
            && self.files.iter().all(|check| check.present)
    }

    /// Process exit status: 0 when both checks passed, 1 otherwise.
    pub fn exit_code(&self) -> i32 {
        if self.is_success() { 0 } else { 1 }
    }

    /// Pretty-printed JSON form of the report.
    pub fn to_json(&self) -> Result<String> {
        let json = JsonReport {
            report: self,
            missing: self.missing_files(),
            success: self.is_success(),
        };
        Ok(serde_json::to_string_pretty(&json)?)
    }
}

/// Runs the directory and file checks against `root` without printing.
#[instrument(level = "info", skip_all, fields(root = %root.display()))]
pub fn inspect(root: &Path) -> ChecklistReport {
    let marker_present = root.join(MARKER_FILE).exists();
    if !marker_present {
        warn!(marker = MARKER_FILE, "marker file not found");
        return ChecklistReport {
            root: root.to_path_buf(),
            marker_present,
            files: Vec::new(),
        };
    }

    let files: Vec<FileCheck> = REQUIRED_FILES
        .iter()
        .map(|path| FileCheck {
            path: path.to_string(),
            present: root.join(path).exists(),
        })
        .collect();

    let report = ChecklistReport {
        root: root.to_path_buf(),
        marker_present,
        files,
    };
    info!(
        missing = report.missing_files().len(),
        success = report.is_success(),
        "checklist inspected"
    );
    report
}

/// Runs the full checklist against `root`, printing progress, instructions and
/// troubleshooting notes to `out`.
pub fn run_checklist<W: Write>(root: &Path, out: &mut W) -> Result<ChecklistReport> {
    let report = inspect(root);

    writeln!(out, "🚀 Firefly-III Automation Integration Setup")?;
    writeln!(out, "{}", "=".repeat(RULE_WIDTH))?;

    write_environment_check(&report, out)?;
    if !report.marker_present {
        return Ok(report);
    }

    write_file_checks(&report, out)?;
    if !report.is_success() {
        writeln!(
            out,
            "\n❌ Some required files are missing. Please ensure all automation files are in place."
        )?;
        return Ok(report);
    }

    write_microservice_notice(out)?;
    write_integration_instructions(out)?;
    write_troubleshooting(out)?;
    write_next_steps(out)?;
    Ok(report)
}

fn write_environment_check<W: Write>(report: &ChecklistReport, out: &mut W) -> Result<()> {
    writeln!(out, "🔧 Checking environment...")?;
    if report.marker_present {
        writeln!(out, "✅ Firefly-III directory detected")?;
    } else {
        writeln!(
            out,
            "❌ This script must be run from the Firefly-III root directory"
        )?;
    }
    Ok(())
}

fn write_file_checks<W: Write>(report: &ChecklistReport, out: &mut W) -> Result<()> {
    writeln!(out, "\n📄 Checking automation files...")?;
    for check in report.files.iter().filter(|check| check.present) {
        writeln!(out, "✅ {}", check.path)?;
    }

    let missing = report.missing_files();
    if !missing.is_empty() {
        writeln!(out, "❌ Missing files:")?;
        for path in missing {
            writeln!(out, "   {path}")?;
        }
    }
    Ok(())
}

fn write_microservice_notice<W: Write>(out: &mut W) -> Result<()> {
    writeln!(out, "\n🔗 Checking PFinance microservice...")?;
    writeln!(out, "⚠️  Please ensure the PFinance microservice is running:")?;
    writeln!(out, "   cd ../pfinance/pfinance-microservice")?;
    writeln!(out, "   python run.py")?;
    Ok(())
}

fn write_integration_instructions<W: Write>(out: &mut W) -> Result<()> {
    const TEXT: &str = "
🎯 Integration Instructions:

1. The automation controls have been added to the account show page.
   Navigate to any account page to see the automation section.

2. The automation controls will:
   - Show automation status for the current account
   - Provide buttons for downloading statements and transactions
   - Allow configuration of supported institutions

3. The integration connects to the PFinance microservice API:
   - Base URL: /api/v1
   - Endpoints: /automation/*

4. To test the integration:
   - Start the PFinance microservice
   - Navigate to an account page in Firefly-III
   - Look for the '🤖 Automation' section

5. Configuration:
   - Use the '⚙️ Automation Config' button to manage institutions
   - Enable/disable automation for specific banks
   - Monitor automation status in real-time";

    writeln!(out, "{TEXT}")?;
    Ok(())
}

fn write_troubleshooting<W: Write>(out: &mut W) -> Result<()> {
    const TEXT: &str = "
🔧 Troubleshooting:

1. If automation controls don't appear:
   - Check browser console for JavaScript errors
   - Ensure automation.js and automation.css are loaded
   - Verify the account page template was updated

2. If API calls fail:
   - Ensure PFinance microservice is running
   - Check CORS settings in the microservice
   - Verify the API base URL is correct

3. If automation doesn't work:
   - Check LastPass credentials are configured
   - Verify institution is enabled in configuration
   - Check automation logs for errors

4. Common issues:
   - CORS errors: Configure microservice to allow Firefly-III domain
   - 404 errors: Ensure automation routes are registered
   - Import errors: Check Python dependencies are installed";

    writeln!(out, "{TEXT}")?;
    Ok(())
}

fn write_next_steps<W: Write>(out: &mut W) -> Result<()> {
    writeln!(out, "\n🎉 Setup completed successfully!")?;
    writeln!(out, "\nNext steps:")?;
    writeln!(out, "1. Start the PFinance microservice")?;
    writeln!(out, "2. Navigate to an account page in Firefly-III")?;
    writeln!(out, "3. Test the automation controls")?;
    writeln!(out, "4. Configure your institutions")?;
    Ok(())
}
