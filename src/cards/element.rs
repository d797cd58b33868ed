//! Card elements and the advantage cycle between them.
//!
//! Fire scorches Earth, Earth absorbs Water, Water douses Fire. A card
//! facing the element it beats fights at double power; facing the element
//! that beats it, at half power (rounded down). `None` is neutral.

use serde::{Deserialize, Serialize};

/// Elemental affinity of a card.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Element {
    #[default]
    None,
    Fire,
    Water,
    Earth,
}

/// How an element fares against another.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Advantage {
    /// Power doubled.
    Strong,
    /// Power unchanged.
    Neutral,
    /// Power halved, rounded down.
    Weak,
}

impl Element {
    /// All elements, neutral first.
    pub const ALL: [Element; 4] = [Element::None, Element::Fire, Element::Water, Element::Earth];

    /// The element this one beats, if any.
    #[must_use]
    pub const fn beats(self) -> Option<Element> {
        match self {
            Element::Fire => Some(Element::Earth),
            Element::Water => Some(Element::Fire),
            Element::Earth => Some(Element::Water),
            Element::None => None,
        }
    }

    /// Advantage of this element against `opponent`.
    ///
    /// ```
    /// use elemental_duel::cards::{Advantage, Element};
    ///
    /// assert_eq!(Element::Fire.advantage_against(Element::Earth), Advantage::Strong);
    /// assert_eq!(Element::Fire.advantage_against(Element::Water), Advantage::Weak);
    /// assert_eq!(Element::Fire.advantage_against(Element::None), Advantage::Neutral);
    /// ```
    #[must_use]
    pub fn advantage_against(self, opponent: Element) -> Advantage {
        if self.beats() == Some(opponent) {
            Advantage::Strong
        } else if opponent.beats() == Some(self) {
            Advantage::Weak
        } else {
            Advantage::Neutral
        }
    }
}

impl Advantage {
    /// Apply this advantage to a base power.
    #[must_use]
    pub fn apply(self, power: i64) -> i64 {
        match self {
            Advantage::Strong => power.saturating_mul(2),
            Advantage::Neutral => power,
            Advantage::Weak => power.div_euclid(2),
        }
    }
}

impl std::fmt::Display for Element {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Element::None => "None",
            Element::Fire => "Fire",
            Element::Water => "Water",
            Element::Earth => "Earth",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cycle() {
        assert_eq!(Element::Fire.beats(), Some(Element::Earth));
        assert_eq!(Element::Earth.beats(), Some(Element::Water));
        assert_eq!(Element::Water.beats(), Some(Element::Fire));
        assert_eq!(Element::None.beats(), None);
    }

    #[test]
    fn test_advantage_is_antisymmetric() {
        for a in Element::ALL {
            for b in Element::ALL {
                let forward = a.advantage_against(b);
                let backward = b.advantage_against(a);
                match forward {
                    Advantage::Strong => assert_eq!(backward, Advantage::Weak),
                    Advantage::Weak => assert_eq!(backward, Advantage::Strong),
                    Advantage::Neutral => assert_eq!(backward, Advantage::Neutral),
                }
            }
        }
    }

    #[test]
    fn test_same_element_is_neutral() {
        for e in Element::ALL {
            assert_eq!(e.advantage_against(e), Advantage::Neutral);
        }
    }

    #[test]
    fn test_apply() {
        assert_eq!(Advantage::Strong.apply(7), 14);
        assert_eq!(Advantage::Neutral.apply(7), 7);
        assert_eq!(Advantage::Weak.apply(7), 3);
        assert_eq!(Advantage::Weak.apply(0), 0);
    }

    #[test]
    fn test_apply_saturates() {
        assert_eq!(Advantage::Strong.apply(i64::MAX / 2 + 1), i64::MAX);
        assert_eq!(Advantage::Strong.apply(i64::MAX), i64::MAX);
        assert_eq!(Advantage::Weak.apply(i64::MAX), i64::MAX / 2);
    }
}
