// crates/globalism-core/src/phone/mask.rs

/// The digit-slot character of a phone mask.
pub const SLOT: char = '#';

/// A positional phone mask such as `"(###) ###-####"`.
///
/// Every [`SLOT`] takes one digit; every other character is literal
/// decoration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhoneMask<'a>(&'a str);

impl<'a> PhoneMask<'a> {
    /// `None` for an empty or whitespace-only mask.
    ///
    /// A mask of only spaces has no slots and nothing to decorate, so it is
    /// treated the same as a country without a mask.
    ///
    /// ```
    /// use globalism_core::phone::PhoneMask;
    ///
    /// assert!(PhoneMask::new("(###) ###-####").is_some());
    /// assert!(PhoneMask::new("   ").is_none());
    /// ```
    pub fn new(mask: &'a str) -> Option<Self> {
        (!mask.trim().is_empty()).then_some(Self(mask))
    }

    pub fn as_str(&self) -> &'a str {
        self.0
    }

    /// Number of digit slots, i.e. the expected national number length.
    pub fn slot_count(&self) -> usize {
        self.0.chars().filter(|&c| c == SLOT).count()
    }

    /// The mask with every slot shown as `0`, whitespace runs collapsed to
    /// one space and trimmed.
    ///
    /// ```
    /// use globalism_core::phone::PhoneMask;
    ///
    /// let mask = PhoneMask::new("(###) ###-####").unwrap();
    /// assert_eq!(mask.placeholder(), "(000) 000-0000");
    /// ```
    pub fn placeholder(&self) -> String {
        let zeroed = self.0.replace(SLOT, "0");
        zeroed.split_whitespace().collect::<Vec<_>>().join(" ")
    }

    /// Lay `digits` onto the mask.
    ///
    /// Each slot takes the next digit. A literal is written only while
    /// fewer slots than digits precede it, so decoration after the last
    /// supplied digit is dropped. Digits beyond the last slot are ignored.
    ///
    /// ```
    /// use globalism_core::phone::PhoneMask;
    ///
    /// let mask = PhoneMask::new("(###) ###-####").unwrap();
    /// assert_eq!(mask.fill("123"), "(123");
    /// assert_eq!(mask.fill("1234"), "(123) 4");
    /// assert_eq!(mask.fill("5551234567"), "(555) 123-4567");
    /// ```
    pub fn fill(&self, digits: &str) -> String {
        let mut digits = digits.chars();
        let available = digits.clone().count();
        let mut consumed = 0;
        let mut out = String::with_capacity(self.0.len());
        for c in self.0.chars() {
            if c == SLOT {
                if let Some(d) = digits.next() {
                    out.push(d);
                }
                consumed += 1;
            } else if consumed < available {
                out.push(c);
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_masks_are_absent() {
        assert!(PhoneMask::new("").is_none());
        assert!(PhoneMask::new("   ").is_none());
    }

    #[test]
    fn counts_slots() {
        assert_eq!(PhoneMask::new("(###) ###-####").map(|m| m.slot_count()), Some(10));
        assert_eq!(PhoneMask::new("#### ######").map(|m| m.slot_count()), Some(10));
        assert_eq!(PhoneMask::new("+--").map(|m| m.slot_count()), Some(0));
    }

    #[test]
    fn placeholder_collapses_whitespace() {
        let mask = PhoneMask::new("  ##\t\t##  ##  ").expect("mask");
        assert_eq!(mask.placeholder(), "00 00 00");
    }

    #[test]
    fn fill_drops_trailing_literals() {
        let mask = PhoneMask::new("(###) ###-####").expect("mask");
        assert_eq!(mask.fill("123456"), "(123) 456");
        assert_eq!(mask.fill("1234567"), "(123) 456-7");
        assert_eq!(mask.fill(""), "");
    }

    #[test]
    fn fill_keeps_leading_literals() {
        let mask = PhoneMask::new("+## ##").expect("mask");
        assert_eq!(mask.fill("1"), "+1");
    }

    #[test]
    fn fill_ignores_surplus_digits() {
        let mask = PhoneMask::new("## ##").expect("mask");
        assert_eq!(mask.fill("123456"), "12 34");
    }
}
