//! Static corpora used across harnesses.
//!
//! `GENESIS_1_1_5` is the opening of the King James text. After
//! normalisation it is a 352-letter buffer with these known sequences
//! (smallest skip first, then smallest index):
//!
//! | Term | Skip | Start |
//! |------|------|-------|
//! | `God` | 1 | 14 |
//! | `dog` | 5 | 326 |
//! | `tree` | 12 | 280 |
//! | `heat` | 13 | 25 |
//! | `seed` | 30 | 259 |
//! | `eden` | 78 | 28 |

use nimbus_core::{corpus, TextBuffer};

pub const GENESIS_1_1_5: &str = "\
    In the beginning God created the heaven and the earth.\n\
    And the earth was without form, and void; and darkness was upon the face of the deep. And the Spirit of God moved upon the face of the waters.\n\
    And God said, Let there be light: and there was light.\n\
    And God saw the light, that it was good: and God divided the light from the darkness.\n\
    And God called the light Day, and the darkness he called Night. And the evening and the morning were the first day.";

pub const GENESIS_1_1_5_LETTERS: usize = 352;

/// Genesis 1:1 with vowel points and cantillation marks.
pub const BERESHIT_POINTED: &str = "בְּרֵאשִׁית בָּרָא אֱלֹהִים אֵת הַשָּׁמַיִם וְאֵת הָאָרֶץ";

/// [`BERESHIT_POINTED`] reduced to consonants.
pub const BERESHIT_LETTERS: &str = "בראשיתבראאלהיםאתהשמיםואתהארץ";

pub fn genesis() -> TextBuffer {
    TextBuffer::new(&corpus::normalize(GENESIS_1_1_5))
}

/// A config file that pins every value the harnesses depend on.
pub const TEST_CONFIG: &str = r#"
[matrix]
size = 5

[search]
min_skip = 1
max_skip = 100

[corpus]
normalize = true
"#;
