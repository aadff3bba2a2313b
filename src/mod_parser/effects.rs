//! ProTracker effect numbering
//!
//! Only naming lives here; effects are not interpreted.

use std::fmt;

/// Effect command in the low nibble of cell byte 2
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Effect {
    /// 0xy - Arpeggio (or no effect when the parameter is 0)
    Arpeggio,
    /// 1xx - Portamento up
    PortaUp,
    /// 2xx - Portamento down
    PortaDown,
    /// 3xx - Tone portamento
    TonePorta,
    /// 4xy - Vibrato
    Vibrato,
    /// 5xy - Tone portamento + volume slide
    TonePortaVolSlide,
    /// 6xy - Vibrato + volume slide
    VibratoVolSlide,
    /// 7xy - Tremolo
    Tremolo,
    /// 8xx - Set panning (unused by ProTracker itself)
    SetPanning,
    /// 9xx - Sample offset
    SampleOffset,
    /// Axy - Volume slide
    VolumeSlide,
    /// Bxx - Position jump
    PositionJump,
    /// Cxx - Set volume
    SetVolume,
    /// Dxx - Pattern break
    PatternBreak,
    /// Exy - Extended command, `x` selects the sub-command
    Extended,
    /// Fxx - Set speed (< 0x20) or tempo
    SetSpeed,
}

impl Effect {
    /// Map an effect number; only the low nibble is used
    pub fn from_nibble(effect: u8) -> Self {
        match effect & 0x0F {
            0x0 => Effect::Arpeggio,
            0x1 => Effect::PortaUp,
            0x2 => Effect::PortaDown,
            0x3 => Effect::TonePorta,
            0x4 => Effect::Vibrato,
            0x5 => Effect::TonePortaVolSlide,
            0x6 => Effect::VibratoVolSlide,
            0x7 => Effect::Tremolo,
            0x8 => Effect::SetPanning,
            0x9 => Effect::SampleOffset,
            0xA => Effect::VolumeSlide,
            0xB => Effect::PositionJump,
            0xC => Effect::SetVolume,
            0xD => Effect::PatternBreak,
            0xE => Effect::Extended,
            _ => Effect::SetSpeed,
        }
    }

    /// Display name
    pub fn name(&self) -> &'static str {
        match self {
            Effect::Arpeggio => "Arpeggio",
            Effect::PortaUp => "Portamento up",
            Effect::PortaDown => "Portamento down",
            Effect::TonePorta => "Tone portamento",
            Effect::Vibrato => "Vibrato",
            Effect::TonePortaVolSlide => "Tone portamento + volume slide",
            Effect::VibratoVolSlide => "Vibrato + volume slide",
            Effect::Tremolo => "Tremolo",
            Effect::SetPanning => "Set panning",
            Effect::SampleOffset => "Sample offset",
            Effect::VolumeSlide => "Volume slide",
            Effect::PositionJump => "Position jump",
            Effect::SetVolume => "Set volume",
            Effect::PatternBreak => "Pattern break",
            Effect::Extended => "Extended",
            Effect::SetSpeed => "Set speed",
        }
    }
}

impl fmt::Display for Effect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_nibble() {
        assert_eq!(Effect::from_nibble(0x0), Effect::Arpeggio);
        assert_eq!(Effect::from_nibble(0xC), Effect::SetVolume);
        assert_eq!(Effect::from_nibble(0xF), Effect::SetSpeed);
        // high nibble ignored
        assert_eq!(Effect::from_nibble(0xFD), Effect::PatternBreak);
    }

    #[test]
    fn test_display() {
        assert_eq!(Effect::PositionJump.to_string(), "Position jump");
    }
}
