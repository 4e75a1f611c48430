//! `kebab` command.

use jsxmark::utils::case::to_kebab_case;
use std::io::{self, Write};

/// Print the kebab-case form of each name on its own line.
pub fn run_kebab(names: &[String], out: &mut impl Write) -> io::Result<()> {
    for name in names {
        writeln!(out, "{}", to_kebab_case(name))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_kebab() {
        let names = ["dataFoo".to_string(), "ID".to_string(), "id".to_string()];
        let mut out = Vec::new();
        run_kebab(&names, &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "data-foo\nid\nid\n");
    }
}
