/// A segment of a raw predicate fragment.
#[derive(Debug, Clone, PartialEq)]
pub enum FragmentToken {
    /// Literal predicate text, emitted verbatim
    ///
    /// # Examples
    /// ```text
    /// "name == "
    /// " AND tags.@count > "
    /// "name == \"$5\""      // quoted placeholders stay literal
    /// ```
    Text(String),

    /// Local placeholder reference
    ///
    /// Numbered from zero within the fragment that contains it. The renderer
    /// adds the number of values emitted before the fragment.
    ///
    /// # Examples
    /// ```text
    /// $0    // Placeholder(0)
    /// $12   // Placeholder(12)
    /// ```
    Placeholder(usize),
}

/// A tokenized raw fragment.
///
/// Fragments are tokenized once, when they are bound, so rendering never has
/// to scan or rewrite predicate text.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Fragment {
    tokens: Vec<FragmentToken>,
}

impl Fragment {
    pub fn new(tokens: Vec<FragmentToken>) -> Self {
        Fragment { tokens }
    }

    pub fn tokens(&self) -> &[FragmentToken] {
        &self.tokens
    }

    /// Writes the fragment into `out` with every placeholder shifted by `offset`.
    pub fn write_offset(&self, out: &mut String, offset: usize) {
        for token in &self.tokens {
            match token {
                FragmentToken::Text(text) => out.push_str(text),
                FragmentToken::Placeholder(n) => {
                    out.push('$');
                    out.push_str(&n.saturating_add(offset).to_string());
                }
            }
        }
    }

    /// Highest local placeholder index plus one, or zero without placeholders.
    pub fn placeholder_span(&self) -> usize {
        self.tokens
            .iter()
            .filter_map(|t| match t {
                FragmentToken::Placeholder(n) => Some(n.saturating_add(1)),
                FragmentToken::Text(_) => None,
            })
            .max()
            .unwrap_or(0)
    }
}
