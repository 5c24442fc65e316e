use anyhow::{bail, Context, Result};
use std::fs;
use std::path::Path;

/// Ports scanned when the caller does not ask for any.
pub const DEFAULT_PORTS: &[u16] = &[22, 80, 443];

/// Parse a port list into TCP ports (1..=65535), keeping order and duplicates.
///
/// Supported syntax:
/// - tokens separated by commas, whitespace or newlines: `22,80 443`
/// - inclusive range: `8000-8010`
/// - comments: everything after `#` on a line is ignored
pub fn parse_ports_str(s: &str) -> Result<Vec<u16>> {
    let mut out: Vec<u16> = Vec::new();

    for (idx, raw_line) in s.lines().enumerate() {
        let line_no = idx + 1;
        let line = raw_line.split('#').next().unwrap_or("");

        for token in line
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|t| !t.is_empty())
        {
            if let Some((a, b)) = token.split_once('-') {
                let start = parse_port_str(a)
                    .with_context(|| format!("line {line_no}: invalid start in range: {token}"))?;
                let end = parse_port_str(b)
                    .with_context(|| format!("line {line_no}: invalid end in range: {token}"))?;
                if start > end {
                    bail!("line {line_no}: invalid range {start}-{end} (start > end)");
                }
                out.extend(start..=end);
                continue;
            }

            let p = parse_port_str(token)
                .with_context(|| format!("line {line_no}: invalid port value: {token}"))?;
            out.push(p);
        }
    }

    Ok(out)
}

/// Load a port list from a file. Errors if the file cannot be read or parsed.
pub fn load_ports_from_path(path: impl AsRef<Path>) -> Result<Vec<u16>> {
    let content = fs::read_to_string(path.as_ref())
        .with_context(|| format!("failed to read ports file: {}", path.as_ref().display()))?;
    parse_ports_str(&content)
}

fn parse_port_str(s: &str) -> Result<u16> {
    let val: u32 = s.trim().parse::<u32>().map_err(|e| anyhow::anyhow!(e))?;
    if val == 0 || val > 65535 {
        bail!("port out of range: {val}");
    }
    Ok(val as u16)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_comma_list() {
        let ports = parse_ports_str("22,80,443").unwrap();
        assert_eq!(ports, vec![22, 80, 443]);
    }

    #[test]
    fn duplicates_and_order_are_kept() {
        let ports = parse_ports_str("443, 22 443\n8001-8002,8001").unwrap();
        assert_eq!(ports, vec![443, 22, 443, 8001, 8002, 8001]);
    }

    #[test]
    fn parse_with_comments_and_blank_lines() {
        let input = r#"
            # web
            80  # http
            443

            8000-8001   # dev servers
        "#;
        let ports = parse_ports_str(input).unwrap();
        assert_eq!(ports, vec![80, 443, 8000, 8001]);
    }

    #[test]
    fn out_of_range_rejected() {
        assert!(parse_ports_str("70000").is_err());
        assert!(parse_ports_str("0").is_err());
    }

    #[test]
    fn reversed_range_rejected() {
        assert!(parse_ports_str("90-80").is_err());
    }
}
