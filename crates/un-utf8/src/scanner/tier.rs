/// UTF-8 sequence length class, declared by the lead byte's high bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Tier {
    /// `0xxxxxxx`
    One,
    /// `110xxxxx 10xxxxxx`
    Two,
    /// `1110xxxx 10xxxxxx 10xxxxxx`
    Three,
    /// `11110xxx 10xxxxxx 10xxxxxx 10xxxxxx`
    Four,
}

pub(crate) const CONTINUATION_TAG_MASK: u8 = 0xC0;
pub(crate) const CONTINUATION_TAG: u8 = 0x80;
pub(crate) const CONTINUATION_PAYLOAD_MASK: u8 = 0x3F;
pub(crate) const CONTINUATION_PAYLOAD_BITS: u32 = 6;

impl Tier {
    /// Classifies `lead`, trying the shortest tier first.
    ///
    /// Returns `None` for continuation bytes (`10xxxxxx`) and for `0xF8..=0xFF`.
    #[inline]
    pub const fn classify(lead: u8) -> Option<Tier> {
        if lead & 0x80 == 0x00 {
            Some(Tier::One)
        } else if lead & 0xE0 == 0xC0 {
            Some(Tier::Two)
        } else if lead & 0xF0 == 0xE0 {
            Some(Tier::Three)
        } else if lead & 0xF8 == 0xF0 {
            Some(Tier::Four)
        } else {
            None
        }
    }

    /// Total bytes in a sequence of this tier.
    #[inline]
    pub const fn len(self) -> usize {
        match self {
            Tier::One => 1,
            Tier::Two => 2,
            Tier::Three => 3,
            Tier::Four => 4,
        }
    }

    /// Smallest value this tier may encode; anything lower is overlong.
    #[inline]
    pub const fn min_code(self) -> u32 {
        match self {
            Tier::One => 0,
            Tier::Two => 0x80,
            Tier::Three => 0x800,
            Tier::Four => 0x1_0000,
        }
    }

    /// Mask selecting the payload bits of the lead byte: 7, 5, 4 or 3 bits.
    #[inline]
    pub(crate) const fn lead_payload_mask(self) -> u8 {
        match self {
            Tier::One => 0x7F,
            Tier::Two => 0x1F,
            Tier::Three => 0x0F,
            Tier::Four => 0x07,
        }
    }

    /// Shortest tier able to hold `code`, or `None` above 21 bits.
    pub const fn for_code(code: u32) -> Option<Tier> {
        match code {
            0..=0x7F => Some(Tier::One),
            0x80..=0x7FF => Some(Tier::Two),
            0x800..=0xFFFF => Some(Tier::Three),
            0x1_0000..=0x1F_FFFF => Some(Tier::Four),
            _ => None,
        }
    }
}

#[inline]
pub(crate) const fn is_continuation(byte: u8) -> bool {
    byte & CONTINUATION_TAG_MASK == CONTINUATION_TAG
}
