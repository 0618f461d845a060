use TileType::*;

#[derive(PartialEq, Eq, Hash, Copy, Clone, Debug)]
pub enum TileType {
    Blocked,
    Open,
    Marker(u8),
}

impl TileType {
    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            -1 => Some(Blocked),
            0 => Some(Open),
            n if n > 0 => u8::try_from(n).ok().map(Marker),
            _ => None,
        }
    }

    pub fn code(&self) -> i32 {
        match self {
            Blocked => -1,
            Open => 0,
            Marker(n) => i32::from(*n),
        }
    }

    pub fn is_walkable(&self) -> bool {
        match self {
            Open | Marker(_) => true,
            Blocked => false,
        }
    }

    pub fn is_blocked(&self) -> bool {
        matches!(self, Blocked)
    }
}
