// Closed vocabulary for entity classes and animation names
//
// The authoring data carries these as free-form strings; loading
// validates them against the enums below so a typo in a tileset fails
// fast instead of producing an entity that silently never animates.

/// Identifier of one animation within an entity's set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnimationName {
    Idle,
    Walk,
    Jump,
    Attack,
    Hurt,
    Die,
    /// Item spin cycle (coins, gems)
    Rotating,
}

impl AnimationName {
    /// Parse an authored tag; returns None for anything unrecognized
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            t if t.eq_ignore_ascii_case("idle") => Some(Self::Idle),
            t if t.eq_ignore_ascii_case("walk") => Some(Self::Walk),
            t if t.eq_ignore_ascii_case("jump") => Some(Self::Jump),
            t if t.eq_ignore_ascii_case("attack") => Some(Self::Attack),
            t if t.eq_ignore_ascii_case("hurt") => Some(Self::Hurt),
            t if t.eq_ignore_ascii_case("die") => Some(Self::Die),
            t if t.eq_ignore_ascii_case("rotating") => Some(Self::Rotating),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Idle => "Idle",
            Self::Walk => "Walk",
            Self::Jump => "Jump",
            Self::Attack => "Attack",
            Self::Hurt => "Hurt",
            Self::Die => "Die",
            Self::Rotating => "Rotating",
        }
    }
}

/// Entity class owning an animation set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityClass {
    Mage,
    Dwarf,
    Coin,
}

impl EntityClass {
    /// Parse an authored tag; returns None for anything unrecognized
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            t if t.eq_ignore_ascii_case("mage") => Some(Self::Mage),
            t if t.eq_ignore_ascii_case("dwarf") => Some(Self::Dwarf),
            t if t.eq_ignore_ascii_case("coin") => Some(Self::Coin),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Mage => "Mage",
            Self::Dwarf => "Dwarf",
            Self::Coin => "Coin",
        }
    }

    /// Check if this class is player-controlled
    pub fn is_player(&self) -> bool {
        matches!(self, Self::Mage)
    }

    /// Check if this class is a hostile entity
    pub fn is_enemy(&self) -> bool {
        matches!(self, Self::Dwarf)
    }

    /// Check if this class is a pickup item
    pub fn is_item(&self) -> bool {
        matches!(self, Self::Coin)
    }
}
