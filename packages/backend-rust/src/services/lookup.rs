//! Word autofill: a built-in dictionary standing in for the external lookup
//! service, with the same fallback shape for unknown words.

use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct LookupEntry {
    pub ipa: String,
    #[serde(rename = "type")]
    pub part_of_speech: String,
    pub meaning: String,
    pub example: String,
}

const DICTIONARY: &[(&str, &str, &str, &str, &str)] = &[
    ("hello", "/həˈləʊ/", "thán từ", "Xin chào", "Hello, how are you?"),
    ("apple", "/ˈæp.l̩/", "danh từ", "Quả táo", "She eats an apple every day."),
    ("book", "/bʊk/", "danh từ", "Quyển sách", "I am reading a good book."),
    ("computer", "/kəmˈpjuː.tər/", "danh từ", "Máy tính", "Start the computer."),
    ("run", "/rʌn/", "động từ", "Chạy", "He can run very fast."),
    ("beautiful", "/ˈbjuː.tɪ.fəl/", "tính từ", "Xinh đẹp", "What a beautiful flower!"),
    ("cat", "/kæt/", "danh từ", "Con mèo", "The cat is sleeping."),
    ("dog", "/dɒɡ/", "danh từ", "Con chó", "The dog barked loudly."),
    ("house", "/haʊs/", "danh từ", "Ngôi nhà", "They bought a new house."),
    ("school", "/skuːl/", "danh từ", "Trường học", "Go to school on time."),
];

pub fn lookup(word: &str) -> LookupEntry {
    let needle = word.trim().to_lowercase();
    for (entry, ipa, part_of_speech, meaning, example) in DICTIONARY {
        if *entry == needle {
            return LookupEntry {
                ipa: (*ipa).to_string(),
                part_of_speech: (*part_of_speech).to_string(),
                meaning: (*meaning).to_string(),
                example: (*example).to_string(),
            };
        }
    }

    LookupEntry {
        ipa: "/.../".to_string(),
        part_of_speech: "...".to_string(),
        meaning: "...".to_string(),
        example: format!("This is an example for '{}'.", word.trim()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_word_hits_the_dictionary() {
        let entry = lookup("  Hello ");
        assert_eq!(entry.meaning, "Xin chào");
        assert_eq!(entry.part_of_speech, "thán từ");
    }

    #[test]
    fn unknown_word_falls_back() {
        let entry = lookup("serendipity");
        assert_eq!(entry.meaning, "...");
        assert_eq!(entry.example, "This is an example for 'serendipity'.");
    }
}
