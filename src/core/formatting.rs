//! Date formatting for the settings preview.
//!
//! The stored `Formatting/dateFormat` value uses the display's legacy
//! token syntax (`dddd, dd. MMMM yyyy`). The display process owns the
//! real rendering; here the tokens are translated to chrono specifiers
//! so the form can show a live preview next to the entry.

use chrono::NaiveDate;

/// Translate a legacy date format string into a chrono format string.
///
/// Tokens: `dddd`/`ddd` weekday name, `dd`/`d` day of month,
/// `MMMM`/`MMM` month name, `MM`/`M` month number, `yyyy`/`yy` year.
/// Single-quoted runs are literals; everything else passes through.
pub fn to_chrono_format(format: &str) -> String {
    let mut out = String::with_capacity(format.len());
    let chars: Vec<char> = format.chars().collect();
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        if c == '\'' {
            // Quoted literal: copy until the closing quote, '' is a
            // single quote.
            i += 1;
            while i < chars.len() {
                if chars[i] == '\'' {
                    if chars.get(i + 1) == Some(&'\'') {
                        out.push('\'');
                        i += 2;
                        continue;
                    }
                    i += 1;
                    break;
                }
                push_literal(&mut out, chars[i]);
                i += 1;
            }
            continue;
        }

        if c == 'd' || c == 'M' || c == 'y' {
            let run = chars[i..].iter().take_while(|&&x| x == c).count();
            let (spec, consumed) = match (c, run) {
                ('d', n) if n >= 4 => ("%A", 4),
                ('d', 3) => ("%a", 3),
                ('d', 2) => ("%d", 2),
                ('d', _) => ("%-d", 1),
                ('M', n) if n >= 4 => ("%B", 4),
                ('M', 3) => ("%b", 3),
                ('M', 2) => ("%m", 2),
                ('M', _) => ("%-m", 1),
                ('y', n) if n >= 4 => ("%Y", 4),
                ('y', _) => ("%y", run.min(2)),
                _ => unreachable!(),
            };
            out.push_str(spec);
            i += consumed;
            continue;
        }

        push_literal(&mut out, c);
        i += 1;
    }

    out
}

fn push_literal(out: &mut String, c: char) {
    if c == '%' {
        out.push_str("%%");
    } else {
        out.push(c);
    }
}

/// Render `date` according to a legacy format string.
pub fn format_date(format: &str, date: NaiveDate) -> String {
    date.format(&to_chrono_format(format)).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_date() -> NaiveDate {
        // A Wednesday.
        NaiveDate::from_ymd_opt(2026, 8, 5).unwrap()
    }

    #[test]
    fn test_default_format_translates() {
        assert_eq!(to_chrono_format("dddd, dd. MMMM yyyy"), "%A, %d. %B %Y");
    }

    #[test]
    fn test_default_format_renders() {
        assert_eq!(
            format_date("dddd, dd. MMMM yyyy", sample_date()),
            "Wednesday, 05. August 2026"
        );
    }

    #[test]
    fn test_short_tokens() {
        assert_eq!(format_date("ddd d.M.yy", sample_date()), "Wed 5.8.26");
    }

    #[test]
    fn test_quoted_literals_pass_through() {
        assert_eq!(
            format_date("'week of' dd.MM.", sample_date()),
            "week of 05.08."
        );
        assert_eq!(format_date("''''", sample_date()), "'");
    }

    #[test]
    fn test_percent_is_escaped() {
        assert_eq!(format_date("dd%", sample_date()), "05%");
    }
}
