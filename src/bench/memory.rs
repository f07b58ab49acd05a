//! Resident-memory sampling for the current process.
//!
//! Linux reads the `VmRSS` field of `/proc/self/status`; other platforms
//! fall back to `ps -o rss=`. Both report kilobytes.

use crate::bench::BenchError;

/// Current resident set size in megabytes.
pub fn resident_mb() -> Result<f64, BenchError> {
    Ok(resident_kb()? as f64 / 1024.0)
}

/// Current resident set size in kilobytes.
#[cfg(target_os = "linux")]
pub fn resident_kb() -> Result<u64, BenchError> {
    let status = std::fs::read_to_string("/proc/self/status")?;
    parse_vm_rss(&status)
        .ok_or_else(|| BenchError::Memory("VmRSS not found in /proc/self/status".to_string()))
}

#[cfg(not(target_os = "linux"))]
pub fn resident_kb() -> Result<u64, BenchError> {
    use std::process::Command;

    let output = Command::new("ps")
        .args(["-o", "rss=", "-p", &std::process::id().to_string()])
        .output()?;
    let text = String::from_utf8(output.stdout)
        .map_err(|e| BenchError::Memory(format!("ps output not UTF-8: {e}")))?;
    text.trim()
        .parse()
        .map_err(|e| BenchError::Memory(format!("bad ps output {:?}: {e}", text.trim())))
}

/// Extract the `VmRSS` kilobyte value from `/proc/[pid]/status` content.
/// Line format: `VmRSS:     1234 kB`.
#[cfg(target_os = "linux")]
fn parse_vm_rss(status: &str) -> Option<u64> {
    status
        .lines()
        .find(|line| line.starts_with("VmRSS:"))?
        .split_whitespace()
        .nth(1)?
        .parse()
        .ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(target_os = "linux")]
    #[test]
    fn test_parse_vm_rss_line() {
        let status = "Name:\tcat\nVmPeak:\t  20 kB\nVmRSS:\t  2048 kB\nVmSwap:\t  0 kB\n";
        assert_eq!(parse_vm_rss(status), Some(2048));
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_parse_vm_rss_missing() {
        assert_eq!(parse_vm_rss("Name:\tcat\nVmSwap:\t  0 kB\n"), None);
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_parse_vm_rss_garbled_value() {
        assert_eq!(parse_vm_rss("VmRSS:\tlots kB\n"), None);
    }

    #[test]
    fn test_resident_is_nonzero() {
        assert!(resident_kb().unwrap() > 0);
    }

    #[test]
    fn test_megabytes_track_kilobytes() {
        assert!(resident_mb().unwrap() > 0.0);
    }
}
