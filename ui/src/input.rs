use anyhow::bail;
use derive_more::Deref;
use util::IndexMap;

/// Menu navigation commands produced by the input backends.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum InputAction {
    Up,
    Down,
    First,
    Last,
    Select,
    Cancel,
}

/// Fixed table from key names to menu commands.
///
/// Key names follow the `[mods-]key` convention, eg. `Esc`, `Ret`, `C-c`.
#[derive(Clone, Deref, Eq, PartialEq, Debug)]
pub struct InputMap(IndexMap<&'static str, InputAction>);

impl Default for InputMap {
    fn default() -> Self {
        use InputAction::*;

        let mut ret: IndexMap<&'static str, InputAction> = Default::default();

        for &(k, cmd) in &[
            ("Up", Up),
            ("Down", Down),
            ("Left", Up),
            ("Right", Down),
            ("Home", First),
            ("End", Last),
            ("PgUp", First),
            ("PgDn", Last),
            ("Ret", Select),
            ("Sp", Select),
            ("Esc", Cancel),
            ("C-c", Cancel),
        ] {
            ret.insert(k, cmd);
        }

        InputMap(ret)
    }
}

impl InputMap {
    pub fn action(&self, key: &str) -> Option<InputAction> {
        self.0.get(key).copied()
    }

    /// Parse a comma-separated list of key names into commands.
    pub fn parse_script(
        &self,
        script: &str,
    ) -> anyhow::Result<Vec<InputAction>> {
        let mut ret = Vec::new();
        for key in script.split(',').map(str::trim).filter(|k| !k.is_empty()) {
            let Some(action) = self.action(key) else {
                bail!("unknown key {key:?}");
            };
            ret.push(action);
        }
        Ok(ret)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scripts() {
        use InputAction::*;

        let map = InputMap::default();
        assert_eq!(map.parse_script("").unwrap(), vec![]);
        assert_eq!(
            map.parse_script("Down, Ret").unwrap(),
            vec![Down, Select]
        );
        assert_eq!(map.parse_script("Up,,Esc,").unwrap(), vec![Up, Cancel]);
        assert!(map.parse_script("Down,F13").is_err());
    }
}
