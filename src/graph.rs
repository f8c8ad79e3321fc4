//! Dependency levelisation for the orchestrator.
//!
//! Checks are grouped into levels by repeated Kahn-style peeling: level k
//! holds the checks whose dependencies all live in levels < k. Cycles are
//! rejected at configuration validation, so construction here is total.
//! Dependencies outside the given slice (e.g. removed by a tag filter)
//! are ignored.

use std::collections::{HashMap, HashSet};

use crate::config::Check;

/// Ordered execution levels; values are indices into the slice handed to
/// [`Levels::build`]. Within a level the original order is preserved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Levels(pub Vec<Vec<usize>>);

impl Levels {
    /// Group `checks` into dependency levels.
    #[must_use]
    pub fn build(checks: &[&Check]) -> Self {
        let index_of: HashMap<&str, usize> = checks
            .iter()
            .enumerate()
            .map(|(i, c)| (c.id.as_str(), i))
            .collect();

        let deps: Vec<Vec<usize>> = checks
            .iter()
            .map(|check| {
                check
                    .requires
                    .iter()
                    .filter_map(|dep| index_of.get(dep.as_str()).copied())
                    .collect()
            })
            .collect();

        let mut placed: HashSet<usize> = HashSet::new();
        let mut levels = Vec::new();

        while placed.len() < checks.len() {
            let ready: Vec<usize> = (0..checks.len())
                .filter(|i| !placed.contains(i))
                .filter(|i| deps[*i].iter().all(|dep| placed.contains(dep)))
                .collect();

            if ready.is_empty() {
                // Unreachable for validated input; folding the remainder
                // into a final level keeps construction total.
                let rest: Vec<usize> =
                    (0..checks.len()).filter(|i| !placed.contains(i)).collect();
                placed.extend(rest.iter().copied());
                levels.push(rest);
                break;
            }

            placed.extend(ready.iter().copied());
            levels.push(ready);
        }

        Self(levels)
    }

    /// Iterate the levels in execution order.
    pub fn iter(&self) -> impl Iterator<Item = &[usize]> {
        self.0.iter().map(Vec::as_slice)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(id: &str, requires: &[&str]) -> Check {
        let doc = format!(
            "id: {id}\nrun: \"true\"\nrequires: [{}]\n",
            requires.join(", ")
        );
        serde_yaml::from_str(&doc).expect("fixture check should parse")
    }

    fn levels_of(checks: &[Check]) -> Vec<Vec<usize>> {
        let refs: Vec<&Check> = checks.iter().collect();
        Levels::build(&refs).0
    }

    #[test]
    fn independent_checks_form_one_level() {
        let checks = vec![check("a", &[]), check("b", &[]), check("c", &[])];
        assert_eq!(levels_of(&checks), vec![vec![0, 1, 2]]);
    }

    #[test]
    fn chain_produces_one_level_per_check() {
        let checks = vec![check("a", &[]), check("b", &["a"]), check("c", &["b"])];
        assert_eq!(levels_of(&checks), vec![vec![0], vec![1], vec![2]]);
    }

    #[test]
    fn diamond_collapses_middle_level() {
        let checks = vec![
            check("base", &[]),
            check("left", &["base"]),
            check("right", &["base"]),
            check("top", &["left", "right"]),
        ];
        assert_eq!(levels_of(&checks), vec![vec![0], vec![1, 2], vec![3]]);
    }

    #[test]
    fn dependencies_always_land_in_earlier_levels() {
        let checks = vec![
            check("a", &[]),
            check("b", &["a"]),
            check("c", &["a", "b"]),
            check("d", &[]),
            check("e", &["d", "c"]),
        ];
        let levels = levels_of(&checks);
        let level_of: HashMap<usize, usize> = levels
            .iter()
            .enumerate()
            .flat_map(|(n, level)| level.iter().map(move |&i| (i, n)))
            .collect();
        for (i, c) in checks.iter().enumerate() {
            for dep in &c.requires {
                let dep_index = checks.iter().position(|x| &x.id == dep).unwrap();
                assert!(
                    level_of[&dep_index] < level_of[&i],
                    "dependency {dep} of {} must be in an earlier level",
                    c.id
                );
            }
        }
    }

    #[test]
    fn filtered_out_dependency_is_ignored() {
        // "b" requires "a", but "a" is not part of the run set.
        let checks = vec![check("b", &["a"]), check("c", &[])];
        assert_eq!(levels_of(&checks), vec![vec![0, 1]]);
    }
}
