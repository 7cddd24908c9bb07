use std::fmt;

/// A tracked monster. Identity is positional: two monsters with the same name
/// and life are distinct entries in a store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Monster {
    pub name: String,
    pub life: i64,
}

impl Monster {
    pub fn new(name: impl Into<String>, life: i64) -> Self {
        Self {
            name: name.into(),
            life,
        }
    }

    /// Adds `delta` to the life counter. No floor is applied: life may reach
    /// zero or go negative.
    pub fn change_life(&mut self, delta: i64) {
        self.life = self.life.saturating_add(delta);
    }

    /// Independent copy carrying `name` and the current life.
    pub fn renamed_copy(&self, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            life: self.life,
        }
    }
}

impl fmt::Display for Monster {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - Life: {}", self.name, self.life)
    }
}
