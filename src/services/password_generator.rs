//! Password generation.
//!
//! Pure functions over a [`GenerationRequest`] and a caller-supplied
//! [`RandomSource`]: no internal state, no side effects. The defining
//! correctness property is the inclusion guarantee: every enabled
//! character class contributes at least one character to the output
//! (unless the requested length is shorter than the class count, where
//! truncation is allowed to break it).

use crate::services::random_source::RandomSource;
use crate::types::password::{CharacterClass, GenerationRequest};

/// Generates one password satisfying the request.
///
/// Algorithm:
/// 1. Empty class set → empty string.
/// 2. One guaranteed character per enabled class, in priority order
///    Lower → Upper → Digit → Symbol.
/// 3. Fill to the requested length: a uniformly chosen enabled class,
///    then a uniformly chosen character from its alphabet.
/// 4. Fisher–Yates shuffle so the guaranteed characters are not
///    predictably placed at the front.
/// 5. Truncate to exactly `length` characters.
pub fn generate(request: &GenerationRequest, rng: &mut dyn RandomSource) -> String {
    let classes = request.classes();
    if classes.is_empty() {
        return String::new();
    }

    let mut chars: Vec<char> = Vec::with_capacity(request.length.max(classes.len()));

    for class in classes {
        chars.push(random_char(*class, request.exclude_similar, rng));
    }

    while chars.len() < request.length {
        let class = classes[rng.pick_index(classes.len())];
        chars.push(random_char(class, request.exclude_similar, rng));
    }

    shuffle(&mut chars, rng);
    chars.truncate(request.length);
    chars.into_iter().collect()
}

/// Draws one uniform character from the class alphabet.
fn random_char(class: CharacterClass, exclude_similar: bool, rng: &mut dyn RandomSource) -> char {
    let alphabet = class.alphabet(exclude_similar).as_bytes();
    alphabet[rng.pick_index(alphabet.len())] as char
}

/// Fisher–Yates shuffle driven by the supplied source.
fn shuffle(chars: &mut [char], rng: &mut dyn RandomSource) {
    for i in (1..chars.len()).rev() {
        let j = rng.pick_index(i + 1);
        chars.swap(i, j);
    }
}
