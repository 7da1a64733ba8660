//! Transient state for the lead-capture (order) form. Lives only for the
//! page session; submission never leaves the client.

#[derive(Debug, Default, Clone, PartialEq)]
pub struct OrderForm {
    pub pharmacy_name: String,
    pub contact_person: String,
    pub email: String,
    pub phone: String,
    pub address: String,
}

impl OrderForm {
    /// All five fields filled in (whitespace-only counts as empty).
    pub fn is_complete(&self) -> bool {
        [
            &self.pharmacy_name,
            &self.contact_person,
            &self.email,
            &self.phone,
            &self.address,
        ]
        .iter()
        .all(|field| !field.trim().is_empty())
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> OrderForm {
        OrderForm {
            pharmacy_name: "Farmàcia Central".into(),
            contact_person: "Anna Puig".into(),
            email: "anna@farmaciacentral.cat".into(),
            phone: "+34 600 000 000".into(),
            address: "Carrer Major 1, Girona".into(),
        }
    }

    #[test]
    fn complete_when_every_field_is_filled() {
        assert!(filled().is_complete());
    }

    #[test]
    fn any_empty_field_blocks_submission() {
        for i in 0..5 {
            let mut form = filled();
            match i {
                0 => form.pharmacy_name.clear(),
                1 => form.contact_person.clear(),
                2 => form.email.clear(),
                3 => form.phone.clear(),
                _ => form.address.clear(),
            }
            assert!(!form.is_complete(), "field {i} left empty");
        }
    }

    #[test]
    fn whitespace_only_counts_as_empty() {
        let mut form = filled();
        form.phone = "   ".into();
        assert!(!form.is_complete());
    }

    #[test]
    fn clear_resets_every_field() {
        let mut form = filled();
        form.clear();
        assert_eq!(form, OrderForm::default());
        assert!(!form.is_complete());
    }
}
