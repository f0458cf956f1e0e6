use std::collections::HashMap;

/// Marker that starts one field's value, e.g. `q/`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Prefix(&'static str);

impl Prefix {
    pub const fn new(token: &'static str) -> Self {
        Self(token)
    }

    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

pub const PREFIX_QUESTION: Prefix = Prefix::new("q/");
pub const PREFIX_ANSWER: Prefix = Prefix::new("a/");
pub const PREFIX_TAG: Prefix = Prefix::new("t/");
pub const PREFIX_CHOICE: Prefix = Prefix::new("c/");

/// Every prefix any command understands.
pub const ALL_PREFIXES: &[Prefix] = &[PREFIX_QUESTION, PREFIX_ANSWER, PREFIX_TAG, PREFIX_CHOICE];

/// Values of an argument string grouped by the prefix that introduced them.
#[derive(Debug, Default, Clone)]
pub struct ArgumentMultimap {
    preamble: String,
    values: HashMap<Prefix, Vec<String>>,
}

impl ArgumentMultimap {
    /// Text before the first prefix.
    pub fn preamble(&self) -> &str {
        &self.preamble
    }

    /// Last value given for `prefix`.
    pub fn value(&self, prefix: Prefix) -> Option<&str> {
        self.values
            .get(&prefix)
            .and_then(|v| v.last())
            .map(String::as_str)
    }

    /// Every value given for `prefix`, in input order.
    pub fn all_values(&self, prefix: Prefix) -> &[String] {
        self.values.get(&prefix).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn contains(&self, prefix: Prefix) -> bool {
        self.values.contains_key(&prefix)
    }

    /// Whether any of `prefixes` was given more than once.
    pub fn has_repeated(&self, prefixes: &[Prefix]) -> bool {
        prefixes
            .iter()
            .any(|p| self.values.get(p).is_some_and(|v| v.len() > 1))
    }

    /// Whether a prefix outside `accepted` was given.
    pub fn has_unexpected(&self, accepted: &[Prefix]) -> bool {
        self.values.keys().any(|p| !accepted.contains(p))
    }
}

/// Split `args` into segments on every known prefix.
///
/// A prefix only counts at the very start of `args` or right after
/// whitespace, so `x/y` inside a value is left alone. Values and the preamble
/// are trimmed. Commands reject prefixes they do not take with
/// [`ArgumentMultimap::has_unexpected`].
pub fn tokenize(args: &str) -> ArgumentMultimap {
    let mut positions: Vec<(usize, Prefix)> = Vec::new();
    for &prefix in ALL_PREFIXES {
        for (pos, _) in args.match_indices(prefix.as_str()) {
            let at_boundary = args[..pos]
                .chars()
                .next_back()
                .is_none_or(char::is_whitespace);
            if at_boundary {
                positions.push((pos, prefix));
            }
        }
    }
    positions.sort_by_key(|(pos, _)| *pos);

    let preamble_end = positions.first().map_or(args.len(), |(pos, _)| *pos);
    let mut map = ArgumentMultimap {
        preamble: args[..preamble_end].trim().to_string(),
        values: HashMap::new(),
    };
    for (i, (pos, prefix)) in positions.iter().enumerate() {
        let start = pos + prefix.as_str().len();
        let end = positions.get(i + 1).map_or(args.len(), |(next, _)| *next);
        map.values
            .entry(*prefix)
            .or_default()
            .push(args[start..end].trim().to_string());
    }
    map
}
