use shared::{
    domain::Monster,
    error::{StoreError, ValidationError},
    input::{is_blank, parse_amount, parse_life},
};

/// Ordered monster records. Insertion order is preserved and nothing is
/// required to be unique.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MonsterStore {
    monsters: Vec<Monster>,
}

impl MonsterStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates the raw form text and appends a new monster.
    pub fn create(&mut self, name: &str, life: &str) -> Result<&Monster, ValidationError> {
        if is_blank(name) || is_blank(life) {
            return Err(ValidationError::MissingNameOrLife);
        }
        let life = parse_life(life)?;
        Ok(self.push(Monster::new(name.trim(), life)))
    }

    /// Applies a signed damage/heal amount to the monster at `index`.
    pub fn adjust_life(&mut self, index: usize, amount: &str) -> Result<&Monster, StoreError> {
        let delta = parse_amount(amount)?;
        let monster = self
            .monsters
            .get_mut(index)
            .ok_or(StoreError::NoSuchMonster { index })?;
        monster.change_life(delta);
        Ok(monster)
    }

    pub fn remove(&mut self, index: usize) -> Result<Monster, StoreError> {
        if index >= self.monsters.len() {
            return Err(StoreError::NoSuchMonster { index });
        }
        Ok(self.monsters.remove(index))
    }

    pub fn clear(&mut self) {
        self.monsters.clear();
    }

    /// Appends a copy of the monster at `index` under `new_name`. The name is
    /// checked for blankness but stored as given.
    pub fn clone_monster(&mut self, index: usize, new_name: &str) -> Result<&Monster, StoreError> {
        if is_blank(new_name) {
            return Err(ValidationError::BlankCloneName.into());
        }
        let copy = self
            .monsters
            .get(index)
            .ok_or(StoreError::NoSuchMonster { index })?
            .renamed_copy(new_name);
        Ok(self.push(copy))
    }

    pub fn get(&self, index: usize) -> Option<&Monster> {
        self.monsters.get(index)
    }

    pub fn len(&self) -> usize {
        self.monsters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.monsters.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Monster> {
        self.monsters.iter()
    }

    /// List lines as displayed, one per monster.
    pub fn rows(&self) -> Vec<String> {
        self.monsters.iter().map(ToString::to_string).collect()
    }

    fn push(&mut self, monster: Monster) -> &Monster {
        self.monsters.push(monster);
        &self.monsters[self.monsters.len() - 1]
    }
}

#[cfg(test)]
#[path = "tests/store_tests.rs"]
mod tests;
