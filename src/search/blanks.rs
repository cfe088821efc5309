//! Expansion of wildcards into concrete letters.
use crate::tiles::{Rack, ALPHABET};

/// The 26 racks obtained by assigning the first wildcard of `rack` to each letter.
/// Empty if the rack has no wildcards.
pub fn substitutions(rack: &Rack) -> Vec<Rack> {
    ALPHABET
        .filter_map(|label| rack.with_wildcard_as(label))
        .collect()
}

/// Assign every wildcard of `rack`, returning all `26^wildcards` fully lettered racks.
///
/// The branches are independent, results for each of them can be merged by set union.
/// ## Examples
/// ```
/// use rack_solver::{search::resolve, Rack};
/// let rack: Rack = "q**".parse().unwrap();
/// let racks = resolve(&rack);
/// assert_eq!(racks.len(), 26 * 26);
/// assert!(racks.iter().all(|rack| !rack.has_wildcards()));
/// ```
pub fn resolve(rack: &Rack) -> Vec<Rack> {
    let mut resolved = Vec::new();
    let mut worklist = vec![rack.clone()];
    while let Some(rack) = worklist.pop() {
        if rack.has_wildcards() {
            worklist.extend(substitutions(&rack));
        } else {
            resolved.push(rack);
        }
    }
    resolved
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tiles::Tile;
    use crate::Error;

    #[test]
    fn test_substitutions() -> Result<(), Error> {
        let rack: Rack = "a*".parse()?;
        let racks = substitutions(&rack);
        assert_eq!(racks.len(), 26);
        assert_eq!(racks[1].tiles(), &[Tile::rack(1), Tile::blank(2)]);
        assert!(substitutions(&"abc".parse()?).is_empty());
        Ok(())
    }

    #[test]
    fn test_resolve_without_wildcards() -> Result<(), Error> {
        let rack: Rack = "cat".parse()?;
        assert_eq!(resolve(&rack), vec![rack]);
        Ok(())
    }
}
