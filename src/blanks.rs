// src/blanks.rs

use std::collections::BTreeSet;

/// Qué palabra hay en cada hueco y qué opciones ya se han gastado.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BlankAssignment {
    placed: Vec<Option<String>>,
    used: BTreeSet<usize>,
}

impl BlankAssignment {
    pub fn new(blank_count: usize) -> Self {
        Self {
            placed: vec![None; blank_count],
            used: BTreeSet::new(),
        }
    }

    pub fn blank_count(&self) -> usize {
        self.placed.len()
    }

    pub fn placed(&self) -> &[Option<String>] {
        &self.placed
    }

    pub fn word_at(&self, blank: usize) -> Option<&str> {
        self.placed.get(blank).and_then(|w| w.as_deref())
    }

    pub fn is_used(&self, option: usize) -> bool {
        self.used.contains(&option)
    }

    pub fn used_count(&self) -> usize {
        self.used.len()
    }

    pub fn filled_count(&self) -> usize {
        self.placed.iter().filter(|w| w.is_some()).count()
    }

    pub fn is_complete(&self) -> bool {
        self.placed.iter().all(Option::is_some)
    }

    /// Coloca la opción en el primer hueco vacío (de izquierda a derecha).
    /// Devuelve `false` si la opción no existe, ya está usada o no quedan huecos.
    pub fn place(&mut self, options: &[String], option: usize) -> bool {
        let Some(word) = options.get(option) else {
            return false;
        };
        if self.used.contains(&option) {
            return false;
        }
        let Some(slot) = self.placed.iter().position(Option::is_none) else {
            return false;
        };
        self.placed[slot] = Some(word.clone());
        self.used.insert(option);
        true
    }

    /// Vacía el hueco y libera la opción cuya palabra coincide.
    ///
    /// La opción se busca por valor: con palabras repetidas se libera la
    /// primera coincidencia, no necesariamente la que se colocó.
    pub fn clear(&mut self, options: &[String], blank: usize) -> bool {
        let Some(word) = self.placed.get_mut(blank).and_then(Option::take) else {
            return false;
        };
        match options.iter().position(|o| *o == word) {
            Some(option) => {
                if !self.used.remove(&option) {
                    log::debug!(
                        "Cleared {word:?} from blank {blank}, but option {option} was not in use"
                    );
                }
            }
            None => log::debug!("Cleared {word:?} from blank {blank} with no matching option"),
        }
        true
    }

    /// Respuesta final: una palabra por hueco, "" en los vacíos.
    pub fn answer(&self) -> Vec<String> {
        self.placed
            .iter()
            .map(|w| w.clone().unwrap_or_default())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(ws: &[&str]) -> Vec<String> {
        ws.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn place_fills_first_empty_blank() {
        let options = words(&["cat", "mat", "dog"]);
        let mut state = BlankAssignment::new(2);

        assert!(state.place(&options, 1));
        assert_eq!(state.placed(), &[Some("mat".to_string()), None]);
        assert!(state.is_used(1));

        assert!(state.place(&options, 0));
        assert_eq!(state.answer(), words(&["mat", "cat"]));
        assert!(state.is_complete());
    }

    #[test]
    fn invalid_placements_are_ignored() {
        let options = words(&["cat", "mat", "dog"]);
        let mut state = BlankAssignment::new(2);

        assert!(state.place(&options, 0));
        let before = state.clone();
        assert!(!state.place(&options, 0), "option already consumed");
        assert!(!state.place(&options, 9), "option out of range");
        assert_eq!(state, before);

        assert!(state.place(&options, 1));
        let full = state.clone();
        assert!(!state.place(&options, 2), "no empty blank left");
        assert_eq!(state, full);
    }

    #[test]
    fn n_placements_fill_n_blanks() {
        let options = words(&["a", "b", "c", "d", "e"]);
        let mut state = BlankAssignment::new(4);
        for (n, option) in [4, 2, 0].into_iter().enumerate() {
            assert!(state.place(&options, option));
            assert_eq!(state.filled_count(), n + 1);
            assert_eq!(state.used_count(), n + 1);
        }
        assert!(!state.is_complete());
        assert_eq!(state.answer(), words(&["e", "c", "a", ""]));
    }

    #[test]
    fn clear_then_place_restores_state() {
        let options = words(&["cat", "mat", "dog"]);
        let mut state = BlankAssignment::new(2);
        state.place(&options, 2);
        state.place(&options, 1);
        let snapshot = state.clone();

        assert!(state.clear(&options, 0));
        assert_eq!(state.word_at(0), None);
        assert!(!state.is_used(2));
        assert!(!state.is_complete());

        assert!(state.place(&options, 2));
        assert_eq!(state, snapshot);
    }

    #[test]
    fn clearing_empty_blank_does_nothing() {
        let options = words(&["cat"]);
        let mut state = BlankAssignment::new(2);
        assert!(!state.clear(&options, 0));
        assert!(!state.clear(&options, 5));
        assert_eq!(state, BlankAssignment::new(2));
    }

    #[test]
    fn duplicate_words_release_first_matching_option() {
        let options = words(&["the", "cat", "the"]);
        let mut state = BlankAssignment::new(2);
        state.place(&options, 2);
        state.place(&options, 1);

        assert!(state.clear(&options, 0));
        // Se busca por valor: la opción 0 nunca estuvo en uso, la 2 sigue gastada
        assert!(!state.is_used(0));
        assert!(state.is_used(2));
    }
}
