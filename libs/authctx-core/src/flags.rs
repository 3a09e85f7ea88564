bitflags::bitflags! {
    /// Flags reported alongside a context value.
    ///
    /// Bit positions match the authorization plugin interface's context
    /// flags and must not be reassigned.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct ContextFlags: u32 {
        /// The value may be extracted and handed outside the engine.
        const EXTRACTABLE = 1 << 0;
        /// The value lives only for the current attempt.
        const VOLATILE = 1 << 1;
        /// The value is retained by the engine across mechanism invocations.
        const STICKY = 1 << 2;
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn bit_positions_are_pinned() {
        assert_eq!(ContextFlags::EXTRACTABLE.bits(), 0b001);
        assert_eq!(ContextFlags::VOLATILE.bits(), 0b010);
        assert_eq!(ContextFlags::STICKY.bits(), 0b100);
        assert_eq!(ContextFlags::all().bits(), 0b111);
    }

    #[test]
    fn unknown_bits_are_dropped_on_truncate() {
        let flags = ContextFlags::from_bits_truncate(0xFF);
        assert_eq!(flags, ContextFlags::all());
        assert!(ContextFlags::from_bits(1 << 3).is_none());
    }
}
