//! Number symbols per locale.

/// How integer digits are split into groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Grouping {
    /// 1,234,567
    Thousands,
    /// 12,34,567
    Indian,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumberLocale {
    pub tag: &'static str,
    pub decimal: &'static str,
    pub group: &'static str,
    pub minus: &'static str,
    /// Minimum digits in the leading group before any separator is used.
    pub min_grouping: usize,
    pub grouping: Grouping,
}

const NBSP: &str = "\u{a0}";
const NARROW_NBSP: &str = "\u{202f}";
const MINUS_SIGN: &str = "\u{2212}";

const fn locale(
    tag: &'static str,
    group: &'static str,
    decimal: &'static str,
) -> NumberLocale {
    NumberLocale {
        tag,
        decimal,
        group,
        minus: "-",
        min_grouping: 1,
        grouping: Grouping::Thousands,
    }
}

static LOCALES: &[NumberLocale] = &[
    locale("en", ",", "."),
    NumberLocale { grouping: Grouping::Indian, ..locale("en-in", ",", ".") },
    NumberLocale { grouping: Grouping::Indian, ..locale("hi", ",", ".") },
    locale("de", ".", ","),
    locale("de-at", NBSP, ","),
    locale("de-ch", "\u{2019}", "."),
    NumberLocale { min_grouping: 2, ..locale("es", ".", ",") },
    locale("fr", NARROW_NBSP, ","),
    locale("it", ".", ","),
    locale("pt", ".", ","),
    NumberLocale { min_grouping: 2, ..locale("pt-pt", NBSP, ",") },
    locale("nl", ".", ","),
    locale("da", ".", ","),
    locale("ru", NBSP, ","),
    NumberLocale { min_grouping: 2, ..locale("pl", NBSP, ",") },
    locale("cs", NBSP, ","),
    NumberLocale { minus: MINUS_SIGN, ..locale("sv", NBSP, ",") },
    NumberLocale { minus: MINUS_SIGN, ..locale("nb", NBSP, ",") },
    NumberLocale { minus: MINUS_SIGN, ..locale("fi", NBSP, ",") },
    locale("ja", ",", "."),
    locale("zh", ",", "."),
    locale("ko", ",", "."),
];

impl NumberLocale {
    /// Every locale with its own symbol table.
    pub fn all() -> &'static [NumberLocale] {
        LOCALES
    }

    /// Resolve a BCP 47 tag such as `de-CH` or `pt_BR`.
    ///
    /// Falls back from the full tag to its language, then to `en`.
    pub fn lookup(tag: &str) -> &'static NumberLocale {
        let normalized = tag.trim().replace('_', "-").to_ascii_lowercase();
        let language = normalized.split('-').next().unwrap_or_default();

        LOCALES
            .iter()
            .find(|l| l.tag == normalized)
            .or_else(|| LOCALES.iter().find(|l| l.tag == language))
            .unwrap_or(&LOCALES[0])
    }

    /// Insert group separators into a run of integer digits.
    pub fn group_digits(&self, digits: &str) -> String {
        if digits.len() < 3 + self.min_grouping {
            return digits.to_string();
        }

        let (head, tail) = digits.split_at(digits.len() - 3);
        let width = match self.grouping {
            Grouping::Thousands => 3,
            Grouping::Indian => 2,
        };

        let mut groups: Vec<&str> = Vec::new();
        let mut end = head.len();
        while end > 0 {
            let start = end.saturating_sub(width);
            groups.push(&head[start..end]);
            end = start;
        }
        groups.reverse();
        groups.push(tail);
        groups.join(self.group)
    }
}
