/// One slot per question, `None` until the user picks an option.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerSheet {
    slots: Vec<Option<usize>>,
}

impl AnswerSheet {
    /// Create a sheet with every slot unanswered.
    pub fn new(len: usize) -> Self {
        Self {
            slots: vec![None; len],
        }
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<usize> {
        self.slots.get(index).copied().flatten()
    }

    /// Record `option` for question `index`, replacing any earlier choice.
    ///
    /// Panics if `index` is out of bounds.
    pub fn set(&mut self, index: usize, option: usize) {
        self.slots[index] = Some(option);
    }

    pub fn is_answered(&self, index: usize) -> bool {
        self.get(index).is_some()
    }

    pub fn answered_count(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    pub fn iter(&self) -> impl Iterator<Item = Option<usize>> + '_ {
        self.slots.iter().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_sheet_is_unanswered() {
        let sheet = AnswerSheet::new(10);
        assert_eq!(sheet.len(), 10);
        assert_eq!(sheet.answered_count(), 0);
        assert!(sheet.iter().all(|slot| slot.is_none()));
    }

    #[test]
    fn test_set_overwrites_previous_choice() {
        let mut sheet = AnswerSheet::new(3);
        sheet.set(1, 2);
        sheet.set(1, 0);
        assert_eq!(sheet.get(1), Some(0));
        assert_eq!(sheet.answered_count(), 1);
        assert!(!sheet.is_answered(0));
        assert_eq!(sheet.get(7), None);
    }
}
