pub mod test_helpers {
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    /// Characters the sanitizer treats specially, plus a few ordinary ones.
    const INTERESTING: &[char] = &[
        '<', '>', ':', '"', '/', '\\', '|', '?', '*', '.', '!', ' ', '\u{0}', '\u{1F}', '\u{7F}',
        '\u{80}', '\u{85}', '\u{9F}', '\u{A0}', 'a', 'C', 'o', 'n', 'N', 'u', 'l', '1', 'é', '日',
        '🐴',
    ];

    /// Deterministic generator of awkward filename candidates.
    pub struct InputGenerator {
        rng: StdRng,
        max_len: usize,
    }

    impl InputGenerator {
        pub fn new(seed: u64) -> Self {
            Self {
                rng: StdRng::seed_from_u64(seed),
                max_len: 40,
            }
        }

        /// Upper bound on generated input length, in code points.
        pub fn max_len(mut self, max_len: usize) -> Self {
            self.max_len = max_len;
            self
        }

        /// Next input, mostly drawn from the special characters.
        pub fn next_input(&mut self) -> String {
            let len = self.rng.gen_range(0..=self.max_len);
            (0..len)
                .map(|_| {
                    if self.rng.gen_bool(0.8) {
                        INTERESTING[self.rng.gen_range(0..INTERESTING.len())]
                    } else {
                        char::from_u32(self.rng.gen_range(0x20..0x3000)).unwrap_or('x')
                    }
                })
                .collect()
        }

        pub fn take(mut self, count: usize) -> Vec<String> {
            (0..count).map(|_| self.next_input()).collect()
        }
    }

    /// Fixed inputs covering each pipeline stage.
    pub fn edge_case_inputs() -> Vec<String> {
        [
            "",
            ".",
            "..",
            "...",
            "./",
            "../",
            "/",
            "//",
            "con",
            "CON",
            "lpt9",
            "com0.txt",
            "foo/bar",
            "//foo//bar//",
            "foo\u{0}bar",
            "a\u{85}b",
            "!!!",
            "!con!",
            ".con",
            "<>:\"/\\|?*",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect()
    }
}
