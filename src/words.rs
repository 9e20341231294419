// ============================================
// src/words.rs
// 単語データ (フラッシュカード・単語リスト・今日の単語)
// ============================================

use std::fmt;

// --------------------------------------------------
// 分類用の列挙型
// --------------------------------------------------

/// フラッシュカードのカテゴリ
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Academic,
    Daily,
    Business,
    Social,
    Travel,
}

/// 難易度
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

/// 品詞 (単語リストのタグ)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WordType {
    Noun,
    Verb,
    Adjective,
    Adverb,
}

impl WordType {
    pub const ALL: [WordType; 4] = [
        WordType::Noun,
        WordType::Verb,
        WordType::Adjective,
        WordType::Adverb,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            WordType::Noun => "noun",
            WordType::Verb => "verb",
            WordType::Adjective => "adjective",
            WordType::Adverb => "adverb",
        }
    }
}

impl fmt::Display for WordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Category::Academic => "academic",
            Category::Daily => "daily",
            Category::Business => "business",
            Category::Social => "social",
            Category::Travel => "travel",
        };
        f.write_str(s)
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Difficulty::Beginner => "beginner",
            Difficulty::Intermediate => "intermediate",
            Difficulty::Advanced => "advanced",
        };
        f.write_str(s)
    }
}

// --------------------------------------------------
// データ構造
// --------------------------------------------------

/// フラッシュカード1枚分の単語
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VocabularyEntry {
    pub word: &'static str,
    pub pronunciation: &'static str, // 発音記号
    pub meaning: &'static str,
    pub example: &'static str, // 例文
    pub category: Category,
    pub difficulty: Difficulty,
}

/// 単語リストの1行
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WordListEntry {
    pub word: &'static str,
    pub kind: WordType,
    pub meaning: &'static str,
}

impl WordListEntry {
    /// 検索対象になる表示テキスト (単語・品詞・意味)
    pub fn display_text(&self) -> String {
        format!("{} {} {}", self.word, self.kind, self.meaning)
    }
}

/// 今日の単語
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DailyWord {
    pub word: &'static str,
    pub pronunciation: &'static str,
    pub meaning: &'static str,
    pub example: &'static str,
}

// --------------------------------------------------
// フラッシュカード
// --------------------------------------------------

pub const FLASHCARDS: &[VocabularyEntry] = &[
    VocabularyEntry {
        word: "Eloquent",
        pronunciation: "/ˈeləkwənt/",
        meaning: "Having or showing the ability to use language clearly and effectively.",
        example: "She gave an eloquent speech that moved the entire audience.",
        category: Category::Academic,
        difficulty: Difficulty::Advanced,
    },
    VocabularyEntry {
        word: "Ubiquitous",
        pronunciation: "/yo͞oˈbikwədəs/",
        meaning: "Present, appearing, or found everywhere.",
        example: "Smartphones have become ubiquitous in modern society.",
        category: Category::Daily,
        difficulty: Difficulty::Intermediate,
    },
    VocabularyEntry {
        word: "Meticulous",
        pronunciation: "/məˈtikyələs/",
        meaning: "Showing great attention to detail; very careful and precise.",
        example: "The scientist was meticulous in recording every observation.",
        category: Category::Business,
        difficulty: Difficulty::Intermediate,
    },
    VocabularyEntry {
        word: "Resilient",
        pronunciation: "/rəˈzilyənt/",
        meaning: "Able to withstand or recover quickly from difficult conditions.",
        example: "The resilient community rebuilt after the natural disaster.",
        category: Category::Social,
        difficulty: Difficulty::Intermediate,
    },
    VocabularyEntry {
        word: "Itinerary",
        pronunciation: "/īˈtinəˌrerē/",
        meaning: "A planned route or journey.",
        example: "Our travel itinerary includes stops in Paris and Rome.",
        category: Category::Travel,
        difficulty: Difficulty::Beginner,
    },
];

// --------------------------------------------------
// 今日の単語 (日付で切り替え)
// --------------------------------------------------

pub const DAILY_WORDS: &[DailyWord] = &[
    DailyWord {
        word: "Eloquent",
        pronunciation: "/ˈeləkwənt/",
        meaning: "Having or showing the ability to use language clearly and effectively.",
        example: "She gave an eloquent speech that moved the entire audience.",
    },
    DailyWord {
        word: "Serendipity",
        pronunciation: "/ˌserənˈdipədē/",
        meaning: "The occurrence and development of events by chance in a happy or beneficial way.",
        example: "A fortunate stroke of serendipity brought the two old friends together.",
    },
    DailyWord {
        word: "Perspicacious",
        pronunciation: "/ˌpərspəˈkāSHəs/",
        meaning: "Having a ready insight into and understanding of things.",
        example: "The perspicacious detective quickly solved the complex case.",
    },
];

// --------------------------------------------------
// 単語リスト (元データの並びのまま、重複も含む)
// --------------------------------------------------

pub const WORD_LIST: &[WordListEntry] = &[
    WordListEntry { word: "Beautiful", kind: WordType::Adjective, meaning: "Pleasing to look at" },
    WordListEntry { word: "Quickly", kind: WordType::Adverb, meaning: "In a fast manner" },
    WordListEntry { word: "Discover", kind: WordType::Verb, meaning: "To find something new" },
    WordListEntry { word: "Knowledge", kind: WordType::Noun, meaning: "Information and understanding" },
    WordListEntry { word: "Important", kind: WordType::Adjective, meaning: "Having great significance" },
    WordListEntry { word: "Achieve", kind: WordType::Verb, meaning: "Kisi goal ko poora karna" },
    WordListEntry { word: "Adapt", kind: WordType::Verb, meaning: "Naye situation mein dhal jaana" },
    WordListEntry { word: "Admire", kind: WordType::Verb, meaning: "Kisi ki tareef karna" },
    WordListEntry { word: "Aggressive", kind: WordType::Adjective, meaning: "Tez ya ladne wala behavior" },
    WordListEntry { word: "Ambition", kind: WordType::Noun, meaning: "Bada sapna ya ichha" },
    WordListEntry { word: "Analyze", kind: WordType::Verb, meaning: "Dhyaan se jaanchna" },
    WordListEntry { word: "Ancient", kind: WordType::Adjective, meaning: "Bahut purana" },
    WordListEntry { word: "Anxiety", kind: WordType::Noun, meaning: "Chinta ya ghabrahat" },
    WordListEntry { word: "Approve", kind: WordType::Verb, meaning: "Manzoori dena" },
    WordListEntry { word: "Appropriate", kind: WordType::Adjective, meaning: "Sahi ya upyukt" },
    WordListEntry { word: "Barrier", kind: WordType::Noun, meaning: "Rukawat ya badha" },
    WordListEntry { word: "Brief", kind: WordType::Adjective, meaning: "Chhota ya jaldi khatam hone wala" },
    WordListEntry { word: "Calculate", kind: WordType::Verb, meaning: "Hisab lagana" },
    WordListEntry { word: "Capacity", kind: WordType::Noun, meaning: "Kshamta ya limit" },
    WordListEntry { word: "Challenge", kind: WordType::Noun, meaning: "Mushkil kaam ya chunauti" },
    WordListEntry { word: "Combine", kind: WordType::Verb, meaning: "Jodna ya ek saath lana" },
    WordListEntry { word: "Comfort", kind: WordType::Noun, meaning: "Aaram ya sukoon" },
    WordListEntry { word: "Commit", kind: WordType::Verb, meaning: "Vachan dena ya tay rehna" },
    WordListEntry { word: "Community", kind: WordType::Noun, meaning: "Ek group jo saath rehta ho" },
    WordListEntry { word: "Compete", kind: WordType::Verb, meaning: "Muqabla karna" },
    WordListEntry { word: "Complex", kind: WordType::Adjective, meaning: "Jatil ya samajhne mein mushkil" },
    WordListEntry { word: "Confident", kind: WordType::Adjective, meaning: "Atmavishwas wala" },
    WordListEntry { word: "Confirm", kind: WordType::Verb, meaning: "Pakka karna ya verify karna" },
    WordListEntry { word: "Consequences", kind: WordType::Noun, meaning: "Kisi kaam ka nateeja" },
    WordListEntry { word: "Consistent", kind: WordType::Adjective, meaning: "Lagatar ek jaisa" },
    WordListEntry { word: "Construct", kind: WordType::Verb, meaning: "Banana ya tayar karna" },
    WordListEntry { word: "Convince", kind: WordType::Verb, meaning: "Manana ya samjhana" },
    WordListEntry { word: "Courage", kind: WordType::Noun, meaning: "Himmat ya bahaduri" },
    WordListEntry { word: "Creative", kind: WordType::Adjective, meaning: "Naye ideas banana" },
    WordListEntry { word: "Crisis", kind: WordType::Noun, meaning: "Sankat ya mushkil time" },
    WordListEntry { word: "Decision", kind: WordType::Noun, meaning: "Faisla ya choice" },
    WordListEntry { word: "Declare", kind: WordType::Verb, meaning: "Ghoshna karna" },
    WordListEntry { word: "Delight", kind: WordType::Noun, meaning: "Badi khushi" },
    WordListEntry { word: "Demand", kind: WordType::Noun, meaning: "Zor ki maang" },
    WordListEntry { word: "Demonstrate", kind: WordType::Verb, meaning: "Dikhakar samjhana" },
    WordListEntry { word: "Determine", kind: WordType::Verb, meaning: "Tay karna" },
    WordListEntry { word: "Develop", kind: WordType::Verb, meaning: "Vikas karna ya improve karna" },
    WordListEntry { word: "Devote", kind: WordType::Verb, meaning: "Samay ya mehnat dena" },
    WordListEntry { word: "Dignity", kind: WordType::Noun, meaning: "Samman ya self-respect" },
    WordListEntry { word: "Disaster", kind: WordType::Noun, meaning: "Badi tabahi" },
    WordListEntry { word: "Discipline", kind: WordType::Noun, meaning: "Anushasan ya niyam follow karna" },
    WordListEntry { word: "Discover", kind: WordType::Verb, meaning: "Kuch naya dhundhna" },
    WordListEntry { word: "Display", kind: WordType::Verb, meaning: "Dikhana ya present karna" },
    WordListEntry { word: "Distribute", kind: WordType::Verb, meaning: "Baantna" },
    WordListEntry { word: "Disturb", kind: WordType::Verb, meaning: "Tangles karna ya pareshan karna" },
    WordListEntry { word: "Efficient", kind: WordType::Adjective, meaning: "Kam time mein sahi kaam karna" },
    WordListEntry { word: "Element", kind: WordType::Noun, meaning: "Hissa ya bhaag" },
    WordListEntry { word: "Embarrass", kind: WordType::Verb, meaning: "Sharminda karna" },
    WordListEntry { word: "Emphasize", kind: WordType::Verb, meaning: "Zor dena" },
    WordListEntry { word: "Encourage", kind: WordType::Verb, meaning: "Himmat badhana" },
    WordListEntry { word: "Energy", kind: WordType::Noun, meaning: "Takaat ya urja" },
    WordListEntry { word: "Enhance", kind: WordType::Verb, meaning: "Behtar banana" },
    WordListEntry { word: "Essential", kind: WordType::Adjective, meaning: "Bahut zaroori" },
    WordListEntry { word: "Establish", kind: WordType::Verb, meaning: "Sthaapna karna" },
    WordListEntry { word: "Evaluate", kind: WordType::Verb, meaning: "Jaanch karna" },
    WordListEntry { word: "Exhausted", kind: WordType::Adjective, meaning: "Bahut thaka hua" },
    WordListEntry { word: "Expand", kind: WordType::Verb, meaning: "Badhna ya failna" },
    WordListEntry { word: "Experience", kind: WordType::Noun, meaning: "Anubhav" },
    WordListEntry { word: "Explain", kind: WordType::Verb, meaning: "Samjhana" },
    WordListEntry { word: "Explore", kind: WordType::Verb, meaning: "Khojna ya jaanchna" },
    WordListEntry { word: "Familiar", kind: WordType::Adjective, meaning: "Jana-pehchana" },
    WordListEntry { word: "Fascinating", kind: WordType::Adjective, meaning: "Bahut interesting" },
    WordListEntry { word: "Flexible", kind: WordType::Adjective, meaning: "Jhukne ya badalne wala" },
    WordListEntry { word: "Focus", kind: WordType::Verb, meaning: "Dhyaan lagana" },
    WordListEntry { word: "Frighten", kind: WordType::Verb, meaning: "Darrana" },
    WordListEntry { word: "Generate", kind: WordType::Verb, meaning: "Paida karna" },
    WordListEntry { word: "Genuine", kind: WordType::Adjective, meaning: "Asli ya sachcha" },
    WordListEntry { word: "Glorious", kind: WordType::Adjective, meaning: "Shandar ya khoobsurat" },
    WordListEntry { word: "Guarantee", kind: WordType::Noun, meaning: "Pakka vada" },
    WordListEntry { word: "Guidance", kind: WordType::Noun, meaning: "Margdarshan" },
    WordListEntry { word: "Habitat", kind: WordType::Noun, meaning: "Rehne ki jagah" },
    WordListEntry { word: "Hesitate", kind: WordType::Verb, meaning: "Hichkichana" },
    WordListEntry { word: "Historic", kind: WordType::Adjective, meaning: "Itihaas se juda hua" },
    WordListEntry { word: "Honor", kind: WordType::Noun, meaning: "Samman" },
    WordListEntry { word: "Humble", kind: WordType::Adjective, meaning: "Vinarm ya simple" },
    WordListEntry { word: "Identify", kind: WordType::Verb, meaning: "Pehchaan karna" },
    WordListEntry { word: "Ignore", kind: WordType::Verb, meaning: "Nazarandaaz karna" },
    WordListEntry { word: "Impact", kind: WordType::Noun, meaning: "Asar ya prabhav" },
    WordListEntry { word: "Impress", kind: WordType::Verb, meaning: "Prabhavit karna" },
    WordListEntry { word: "Improve", kind: WordType::Verb, meaning: "Behtar banana" },
    WordListEntry { word: "Inspire", kind: WordType::Verb, meaning: "Prerit karna" },
    WordListEntry { word: "Intelligent", kind: WordType::Adjective, meaning: "Hoshiyaar ya samajhdaar" },
    WordListEntry { word: "Interrupt", kind: WordType::Verb, meaning: "Beech mein rokna" },
    WordListEntry { word: "Introduce", kind: WordType::Verb, meaning: "Parichay karana" },
    WordListEntry { word: "Involve", kind: WordType::Verb, meaning: "Shaamil karna" },
    WordListEntry { word: "Abandon", kind: WordType::Verb, meaning: "Chhod dena ya give up karna" },
    WordListEntry { word: "Abolish", kind: WordType::Verb, meaning: "Khatm kar dena" },
    WordListEntry { word: "Accelerate", kind: WordType::Verb, meaning: "Tez karna" },
    WordListEntry { word: "Accessible", kind: WordType::Adjective, meaning: "Aasaan se pahunchne layak" },
    WordListEntry { word: "Accomplish", kind: WordType::Verb, meaning: "Pura karna" },
    WordListEntry { word: "Accountable", kind: WordType::Adjective, meaning: "Jis par zimmedari ho" },
    WordListEntry { word: "Accumulate", kind: WordType::Verb, meaning: "Ikatthe karna" },
    WordListEntry { word: "Accurate", kind: WordType::Adjective, meaning: "Bilkul sahi" },
    WordListEntry { word: "Accuse", kind: WordType::Verb, meaning: "Ilzaam lagana" },
    WordListEntry { word: "Adapt", kind: WordType::Verb, meaning: "Adjust ho jaana" },
    WordListEntry { word: "Addict", kind: WordType::Noun, meaning: "Aadat pad chuki ho kisi cheez ki" },
    WordListEntry { word: "Adequate", kind: WordType::Adjective, meaning: "Kaafi matra mein" },
    WordListEntry { word: "Adjacent", kind: WordType::Adjective, meaning: "Bilkul paas wala" },
    WordListEntry { word: "Admire", kind: WordType::Verb, meaning: "Tareef karna" },
    WordListEntry { word: "Adore", kind: WordType::Verb, meaning: "Bahut pyaar karna" },
    WordListEntry { word: "Advance", kind: WordType::Verb, meaning: "Aage badhna" },
    WordListEntry { word: "Adventurous", kind: WordType::Adjective, meaning: "Risk lene wala ya exciting" },
    WordListEntry { word: "Advocate", kind: WordType::Verb, meaning: "Samarthan karna" },
    WordListEntry { word: "Affection", kind: WordType::Noun, meaning: "Pyaar ya lagav" },
    WordListEntry { word: "Affirm", kind: WordType::Verb, meaning: "Confirm karna" },
    WordListEntry { word: "Agitate", kind: WordType::Verb, meaning: "Bechain ya pareshaan karna" },
    WordListEntry { word: "Alert", kind: WordType::Adjective, meaning: "Hoshiyar ya saavdhan" },
    WordListEntry { word: "Allocate", kind: WordType::Verb, meaning: "Baantna ya assign karna" },
    WordListEntry { word: "Allow", kind: WordType::Verb, meaning: "Ijazat dena" },
    WordListEntry { word: "Alter", kind: WordType::Verb, meaning: "Badalna" },
    WordListEntry { word: "Amend", kind: WordType::Verb, meaning: "Sudhaar karna" },
    WordListEntry { word: "Amaze", kind: WordType::Verb, meaning: "Hairan kar dena" },
    WordListEntry { word: "Ambitious", kind: WordType::Adjective, meaning: "Bada sapna rakhne wala" },
    WordListEntry { word: "Analyze", kind: WordType::Verb, meaning: "Gehraai se jaanchna" },
    WordListEntry { word: "Ancient", kind: WordType::Adjective, meaning: "Bahut purana" },
    WordListEntry { word: "Announce", kind: WordType::Verb, meaning: "Ailan karna" },
    WordListEntry { word: "Anticipate", kind: WordType::Verb, meaning: "Pehle se soch lena" },
    WordListEntry { word: "Anxiety", kind: WordType::Noun, meaning: "Bechaini ya ghabrahat" },
    WordListEntry { word: "Appeal", kind: WordType::Verb, meaning: "Vinati ya request karna" },
    WordListEntry { word: "Approve", kind: WordType::Verb, meaning: "Sahmati dena" },
    WordListEntry { word: "Arise", kind: WordType::Verb, meaning: "Uthna ya shuru hona" },
    WordListEntry { word: "Arrange", kind: WordType::Verb, meaning: "Sahi tarah se rakhna" },
    WordListEntry { word: "Arrogant", kind: WordType::Adjective, meaning: "Ghamandi ya over-confident" },
    WordListEntry { word: "Ascend", kind: WordType::Verb, meaning: "Upar chadhna" },
    WordListEntry { word: "Assert", kind: WordType::Verb, meaning: "Dabav ke sath bolna" },
    WordListEntry { word: "Assess", kind: WordType::Verb, meaning: "Jaanchna ya evaluate karna" },
    WordListEntry { word: "Assign", kind: WordType::Verb, meaning: "Kaam dena" },
    WordListEntry { word: "Assist", kind: WordType::Verb, meaning: "Madad karna" },
    WordListEntry { word: "Assure", kind: WordType::Verb, meaning: "Yakeen dilana" },
    WordListEntry { word: "Attach", kind: WordType::Verb, meaning: "Jod dena" },
    WordListEntry { word: "Attain", kind: WordType::Verb, meaning: "Prapt karna" },
    WordListEntry { word: "Attempt", kind: WordType::Verb, meaning: "Koshish karna" },
    WordListEntry { word: "Attract", kind: WordType::Verb, meaning: "Aakarshit karna" },
    WordListEntry { word: "Attribute", kind: WordType::Noun, meaning: "Khasiyat ya guna" },
    WordListEntry { word: "Authorize", kind: WordType::Verb, meaning: "Permission dena" },
    WordListEntry { word: "Awkward", kind: WordType::Adjective, meaning: "Thoda uljhan wala ya odd lagne wala" },
    WordListEntry { word: "Balance", kind: WordType::Noun, meaning: "Santulan ya barabari" },
    WordListEntry { word: "Ban", kind: WordType::Verb, meaning: "Rok lagana" },
    WordListEntry { word: "Barrier", kind: WordType::Noun, meaning: "Rukawat" },
    WordListEntry { word: "Battle", kind: WordType::Noun, meaning: "Ladai ya sangharsh" },
    WordListEntry { word: "Behold", kind: WordType::Verb, meaning: "Dhyaan se dekhna" },
    WordListEntry { word: "Belong", kind: WordType::Verb, meaning: "Kisi jagah ya group ka hissa hona" },
    WordListEntry { word: "Benefactor", kind: WordType::Noun, meaning: "Madad karne wala" },
    WordListEntry { word: "Betray", kind: WordType::Verb, meaning: "Dhokha dena" },
    WordListEntry { word: "Bewilder", kind: WordType::Verb, meaning: "Confuse kar dena" },
    WordListEntry { word: "Bizarre", kind: WordType::Adjective, meaning: "Bahut ajeeb" },
    WordListEntry { word: "Boost", kind: WordType::Verb, meaning: "Badhaava dena" },
    WordListEntry { word: "Bounce", kind: WordType::Verb, meaning: "Uchhalna" },
    WordListEntry { word: "Brag", kind: WordType::Verb, meaning: "Shekhi marna" },
    WordListEntry { word: "Breach", kind: WordType::Verb, meaning: "Todna ya violate karna" },
    WordListEntry { word: "Broaden", kind: WordType::Verb, meaning: "Vishtar karna" },
    WordListEntry { word: "Burst", kind: WordType::Verb, meaning: "Phat jana" },
    WordListEntry { word: "Calculate", kind: WordType::Verb, meaning: "Hisab lagana" },
    WordListEntry { word: "Calm", kind: WordType::Adjective, meaning: "Shaant" },
    WordListEntry { word: "Capture", kind: WordType::Verb, meaning: "Pakad lena" },
    WordListEntry { word: "Cease", kind: WordType::Verb, meaning: "Band karna" },
    WordListEntry { word: "Challenge", kind: WordType::Noun, meaning: "Mushkil kaam ya takkar" },
    WordListEntry { word: "Chaos", kind: WordType::Noun, meaning: "Gadbad ya afra tafri" },
    WordListEntry { word: "Cherish", kind: WordType::Verb, meaning: "Dil se sambhalna ya enjoy karna" },
    WordListEntry { word: "Circumstance", kind: WordType::Noun, meaning: "Paristhiti" },
    WordListEntry { word: "Circulate", kind: WordType::Verb, meaning: "Ghumna ya phailna" },
    WordListEntry { word: "Civil", kind: WordType::Adjective, meaning: "Sabhyata se bharpur" },
    WordListEntry { word: "Clarify", kind: WordType::Verb, meaning: "Clear karna" },
    WordListEntry { word: "Clash", kind: WordType::Noun, meaning: "Takrav ya jhagad" },
    WordListEntry { word: "Classify", kind: WordType::Verb, meaning: "Vargikaran karna" },
    WordListEntry { word: "Cling", kind: WordType::Verb, meaning: "Chipakna" },
    WordListEntry { word: "Collapse", kind: WordType::Verb, meaning: "Gir jana" },
    WordListEntry { word: "Combine", kind: WordType::Verb, meaning: "Jodna" },
    WordListEntry { word: "Comfort", kind: WordType::Noun, meaning: "Sukoon ya rahat" },
    WordListEntry { word: "Command", kind: WordType::Verb, meaning: "Aadesh dena" },
    WordListEntry { word: "Commence", kind: WordType::Verb, meaning: "Shuru karna" },
    WordListEntry { word: "Commit", kind: WordType::Verb, meaning: "Wada karna ya lagan se kaam karna" },
    WordListEntry { word: "Communicate", kind: WordType::Verb, meaning: "Baatein karna ya sampark karna" },
    WordListEntry { word: "Compare", kind: WordType::Verb, meaning: "Tulna karna" },
    WordListEntry { word: "Compel", kind: WordType::Verb, meaning: "Majboor karna" },
    WordListEntry { word: "Compensate", kind: WordType::Verb, meaning: "Badla dena ya bharpai karna" },
    WordListEntry { word: "Compile", kind: WordType::Verb, meaning: "Ikatthe karna" },
    WordListEntry { word: "Comply", kind: WordType::Verb, meaning: "Niyam maanana" },
    WordListEntry { word: "Compose", kind: WordType::Verb, meaning: "Banana ya rachna" },
    WordListEntry { word: "Comprehend", kind: WordType::Verb, meaning: "Samajhna" },
    WordListEntry { word: "Concentrate", kind: WordType::Verb, meaning: "Dhyaan lagana" },
    WordListEntry { word: "Conclude", kind: WordType::Verb, meaning: "Nateeja nikalna" },
    WordListEntry { word: "Condemn", kind: WordType::Verb, meaning: "Ninda karna" },
    WordListEntry { word: "Confer", kind: WordType::Verb, meaning: "Vichaar karna" },
    WordListEntry { word: "Confess", kind: WordType::Verb, meaning: "Sammati se sach batana" },
    WordListEntry { word: "Confront", kind: WordType::Verb, meaning: "Samna karna" },
    WordListEntry { word: "Conserve", kind: WordType::Verb, meaning: "Bachana ya preserve karna" },
    WordListEntry { word: "Consist", kind: WordType::Verb, meaning: "Banaya hona kisi se" },
    WordListEntry { word: "Consolidate", kind: WordType::Verb, meaning: "Majboot banana ya jodna" },
    WordListEntry { word: "Constitution", kind: WordType::Noun, meaning: "Sansad dwara bana niyam" },
    WordListEntry { word: "Construct", kind: WordType::Verb, meaning: "Banana ya nirman karna" },
    WordListEntry { word: "Consult", kind: WordType::Verb, meaning: "Salaah lena" },
    WordListEntry { word: "Contain", kind: WordType::Verb, meaning: "Samaana ya rakha hona" },
    WordListEntry { word: "Contaminate", kind: WordType::Verb, meaning: "Ganda kar dena" },
    WordListEntry { word: "Contemplate", kind: WordType::Verb, meaning: "Gehraai se sochna" },
    WordListEntry { word: "Contest", kind: WordType::Verb, meaning: "Takraar karna ya compete karna" },
    WordListEntry { word: "Continue", kind: WordType::Verb, meaning: "Jari rakhna" },
    WordListEntry { word: "Contract", kind: WordType::Noun, meaning: "Kanooni agreement" },
    WordListEntry { word: "Contradict", kind: WordType::Verb, meaning: "Ultal bolna ya oppose karna" },
    WordListEntry { word: "Contribute", kind: WordType::Verb, meaning: "Yogdaan dena" },
    WordListEntry { word: "Coordinate", kind: WordType::Verb, meaning: "Milkar kaam karna" },
    WordListEntry { word: "Corrupt", kind: WordType::Adjective, meaning: "Beimaan ya bhrasht" },
    WordListEntry { word: "Counsel", kind: WordType::Verb, meaning: "Salaah dena" },
    WordListEntry { word: "Counter", kind: WordType::Verb, meaning: "Ulta jawaab dena ya rokna" },
    WordListEntry { word: "Courage", kind: WordType::Noun, meaning: "Himmat" },
    WordListEntry { word: "Courtesy", kind: WordType::Noun, meaning: "Vinarmata aur tameez" },
    WordListEntry { word: "Crisis", kind: WordType::Noun, meaning: "Bahut mushkil halat" },
    WordListEntry { word: "Crucial", kind: WordType::Adjective, meaning: "Bahut zaroori" },
    WordListEntry { word: "Cultivate", kind: WordType::Verb, meaning: "Vikas karna ya ugana" },
    WordListEntry { word: "Cure", kind: WordType::Verb, meaning: "Ilaj karna" },
    WordListEntry { word: "Customize", kind: WordType::Verb, meaning: "Apni need ke hisab se badalna" },
    WordListEntry { word: "Dazzle", kind: WordType::Verb, meaning: "Jhakmaar roshni se chonka dena" },
    WordListEntry { word: "Debate", kind: WordType::Noun, meaning: "Bahas" },
    WordListEntry { word: "Decay", kind: WordType::Verb, meaning: "Galna ya kharab hona" },
    WordListEntry { word: "Deceive", kind: WordType::Verb, meaning: "Dhokha dena" },
    WordListEntry { word: "Declare", kind: WordType::Verb, meaning: "Officially announce karna" },
    WordListEntry { word: "Dedicate", kind: WordType::Verb, meaning: "Samarpit karna" },
    WordListEntry { word: "Deficit", kind: WordType::Noun, meaning: "Kami ya shortage" },
    WordListEntry { word: "Delegate", kind: WordType::Verb, meaning: "Kaam dusre ko saunp dena" },
    WordListEntry { word: "Deliberate", kind: WordType::Adjective, meaning: "Soch samajh kar kiya hua" },
    WordListEntry { word: "Delight", kind: WordType::Noun, meaning: "Khushi ya anand" },
    WordListEntry { word: "Demand", kind: WordType::Verb, meaning: "Zor se maang karna" },
    WordListEntry { word: "Demolish", kind: WordType::Verb, meaning: "Tod kar gira dena" },
    WordListEntry { word: "Demonstrate", kind: WordType::Verb, meaning: "Karke dikhana" },
    WordListEntry { word: "Deny", kind: WordType::Verb, meaning: "Mana kar dena" },
    WordListEntry { word: "Depart", kind: WordType::Verb, meaning: "Ravangi karna ya nikalna" },
    WordListEntry { word: "Depend", kind: WordType::Verb, meaning: "Nirbhar hona" },
    WordListEntry { word: "Depict", kind: WordType::Verb, meaning: "Dikhana ya portray karna" },
    WordListEntry { word: "Deprive", kind: WordType::Verb, meaning: "Door rakhna ya vanchit karna" },
    WordListEntry { word: "Derive", kind: WordType::Verb, meaning: "Nikalna ya prapt karna" },
    WordListEntry { word: "Descend", kind: WordType::Verb, meaning: "Neeche utarna" },
    WordListEntry { word: "Desire", kind: WordType::Noun, meaning: "Ichha ya strong want" },
    WordListEntry { word: "Despair", kind: WordType::Noun, meaning: "Niraasha" },
    WordListEntry { word: "Destroy", kind: WordType::Verb, meaning: "Nuksaan pahuncha kar khatam kar dena" },
    WordListEntry { word: "Detach", kind: WordType::Verb, meaning: "Alag karna" },
    WordListEntry { word: "Determine", kind: WordType::Verb, meaning: "Faisla lena ya nishchit karna" },
    WordListEntry { word: "Devastate", kind: WordType::Verb, meaning: "Poora barbad kar dena" },
    WordListEntry { word: "Devote", kind: WordType::Verb, meaning: "Pure mann se samarpit karna" },
    WordListEntry { word: "Diagnose", kind: WordType::Verb, meaning: "Bimari ka pata lagana" },
    WordListEntry { word: "Differentiate", kind: WordType::Verb, meaning: "Farq pehchanna" },
    WordListEntry { word: "Dignity", kind: WordType::Noun, meaning: "Samman" },
    WordListEntry { word: "Diminish", kind: WordType::Verb, meaning: "Kam hona ya karna" },
    WordListEntry { word: "Disappoint", kind: WordType::Verb, meaning: "Niraash kar dena" },
    WordListEntry { word: "Disaster", kind: WordType::Noun, meaning: "Tabahi" },
    WordListEntry { word: "Discipline", kind: WordType::Noun, meaning: "Anushasan" },
    WordListEntry { word: "Disclose", kind: WordType::Verb, meaning: "Raaz batana" },
    WordListEntry { word: "Discriminate", kind: WordType::Verb, meaning: "Bhedbhaav karna" },
    WordListEntry { word: "Discuss", kind: WordType::Verb, meaning: "Baatchit karna" },
    WordListEntry { word: "Disguise", kind: WordType::Verb, meaning: "Bhes badalna" },
    WordListEntry { word: "Dismantle", kind: WordType::Verb, meaning: "Todhna ya alag karna" },
    WordListEntry { word: "Dismiss", kind: WordType::Verb, meaning: "Reject ya hata dena" },
    WordListEntry { word: "Display", kind: WordType::Verb, meaning: "Dikhana" },
    WordListEntry { word: "Dispose", kind: WordType::Verb, meaning: "Fenk dena ya chutkaara paana" },
    WordListEntry { word: "Dissolve", kind: WordType::Verb, meaning: "Ghulna ya khatam ho jana" },
    WordListEntry { word: "Distribute", kind: WordType::Verb, meaning: "Baantna" },
    WordListEntry { word: "Diverse", kind: WordType::Adjective, meaning: "Alag-alag tarah ka" },
    WordListEntry { word: "Divert", kind: WordType::Verb, meaning: "Rasta ya dhyaan badal dena" },
    WordListEntry { word: "Dominate", kind: WordType::Verb, meaning: "Control karna" },
    WordListEntry { word: "Donate", kind: WordType::Verb, meaning: "Daan dena" },
    WordListEntry { word: "Doubtful", kind: WordType::Adjective, meaning: "Shakki ya unsure" },
    WordListEntry { word: "Draft", kind: WordType::Noun, meaning: "Rough version ya khaka" },
    WordListEntry { word: "Drastic", kind: WordType::Adjective, meaning: "Bahut teekha ya strong effect wala" },
    WordListEntry { word: "Duplicate", kind: WordType::Verb, meaning: "Copy banana" },
    WordListEntry { word: "Duration", kind: WordType::Noun, meaning: "Kitne time tak" },
    WordListEntry { word: "Dwell", kind: WordType::Verb, meaning: "Rehna ya soch mein atka rehna" },
    WordListEntry { word: "Eager", kind: WordType::Adjective, meaning: "Bahut utsuk" },
    WordListEntry { word: "Ease", kind: WordType::Noun, meaning: "Aaram ya aasani" },
    WordListEntry { word: "Economize", kind: WordType::Verb, meaning: "Paise bachana" },
    WordListEntry { word: "Educate", kind: WordType::Verb, meaning: "Siksha dena" },
    WordListEntry { word: "Efficient", kind: WordType::Adjective, meaning: "Kam mehnat mein zyada output" },
    WordListEntry { word: "Elaborate", kind: WordType::Verb, meaning: "Detail mein batana" },
    WordListEntry { word: "Elevate", kind: WordType::Verb, meaning: "Upar uthana ya badaana" },
    WordListEntry { word: "Eliminate", kind: WordType::Verb, meaning: "Hata dena ya khatam karna" },
    WordListEntry { word: "Embarrass", kind: WordType::Verb, meaning: "Sharminada karna" },
    WordListEntry { word: "Emphasize", kind: WordType::Verb, meaning: "Zor dena" },
    WordListEntry { word: "Empower", kind: WordType::Verb, meaning: "Shakti dena ya strong banana" },
    WordListEntry { word: "Enable", kind: WordType::Verb, meaning: "Sambhav banana" },
    WordListEntry { word: "Encounter", kind: WordType::Verb, meaning: "Samna karna" },
    WordListEntry { word: "Encourage", kind: WordType::Verb, meaning: "Himmat badhana" },
    WordListEntry { word: "Endanger", kind: WordType::Verb, meaning: "Khatre mein daalna" },
    WordListEntry { word: "Endorse", kind: WordType::Verb, meaning: "Support ya recommend karna" },
    WordListEntry { word: "Endure", kind: WordType::Verb, meaning: "Sahan karna" },
    WordListEntry { word: "Enhance", kind: WordType::Verb, meaning: "Sudhaar karna" },
    WordListEntry { word: "Enlighten", kind: WordType::Verb, meaning: "Gyaan dena" },
    WordListEntry { word: "Enrich", kind: WordType::Verb, meaning: "Aur behtar banana" },
    WordListEntry { word: "Entertain", kind: WordType::Verb, meaning: "Manoranjan karna" },
    WordListEntry { word: "Enforce", kind: WordType::Verb, meaning: "Zabardasti lagu karna" },
    WordListEntry { word: "Ensure", kind: WordType::Verb, meaning: "Pakka karna" },
    WordListEntry { word: "Entitle", kind: WordType::Verb, meaning: "Haqq dena" },
    WordListEntry { word: "Envy", kind: WordType::Noun, meaning: "Jalan ya jealousy" },
    WordListEntry { word: "Equate", kind: WordType::Verb, meaning: "Barabar karna" },
    WordListEntry { word: "Equip", kind: WordType::Verb, meaning: "Samaan dena ya ready karna" },
    WordListEntry { word: "Erode", kind: WordType::Verb, meaning: "Ghiste hue kam hona" },
    WordListEntry { word: "Errand", kind: WordType::Noun, meaning: "Chhota kaam ya message le jana" },
    WordListEntry { word: "Establish", kind: WordType::Verb, meaning: "Sthapit karna" },
    WordListEntry { word: "Estimate", kind: WordType::Verb, meaning: "Andaza lagana" },
    WordListEntry { word: "Evaluate", kind: WordType::Verb, meaning: "Jaanchna" },
    WordListEntry { word: "Evaporate", kind: WordType::Verb, meaning: "Udd jana ya bhaap banna" },
    WordListEntry { word: "Evolve", kind: WordType::Verb, meaning: "Dheere dheere vikas hona" },
    WordListEntry { word: "Exceed", kind: WordType::Verb, meaning: "Limit se zyada hona" },
    WordListEntry { word: "Excel", kind: WordType::Verb, meaning: "Bahut achha perform karna" },
    WordListEntry { word: "Exclude", kind: WordType::Verb, meaning: "Bahaar rakhna" },
    WordListEntry { word: "Exhaust", kind: WordType::Verb, meaning: "Thaka dena" },
    WordListEntry { word: "Expand", kind: WordType::Verb, meaning: "Badhaana" },
    WordListEntry { word: "Expect", kind: WordType::Verb, meaning: "Umeed rakhna" },
    WordListEntry { word: "Expertise", kind: WordType::Noun, meaning: "Kisi cheez ka high-level gyaan" },
    WordListEntry { word: "Expire", kind: WordType::Verb, meaning: "Khatam ho jana" },
    WordListEntry { word: "Explain", kind: WordType::Verb, meaning: "Samjhana" },
    WordListEntry { word: "Explode", kind: WordType::Verb, meaning: "Phat jana" },
    WordListEntry { word: "Explore", kind: WordType::Verb, meaning: "Khojna" },
    WordListEntry { word: "Expose", kind: WordType::Verb, meaning: "Kholna ya saamne lana" },
    WordListEntry { word: "Extend", kind: WordType::Verb, meaning: "Badaana" },
    WordListEntry { word: "Extract", kind: WordType::Verb, meaning: "Nikalna" },
    WordListEntry { word: "Extreme", kind: WordType::Adjective, meaning: "Bahut zyada" },
    WordListEntry { word: "Fabricate", kind: WordType::Verb, meaning: "Jhut taiyaar karna" },
    WordListEntry { word: "Facilitate", kind: WordType::Verb, meaning: "Aasaan banana" },
    WordListEntry { word: "Fascinate", kind: WordType::Verb, meaning: "Aakarshit karna" },
    WordListEntry { word: "Falter", kind: WordType::Verb, meaning: "Hichkichana" },
    WordListEntry { word: "Farewell", kind: WordType::Noun, meaning: "Alvida bolna" },
    WordListEntry { word: "Fatal", kind: WordType::Adjective, meaning: "Maut ya gambhir nuksaan wala" },
    WordListEntry { word: "Favor", kind: WordType::Noun, meaning: "Madad ya support" },
    WordListEntry { word: "Feeble", kind: WordType::Adjective, meaning: "Kamzor" },
    WordListEntry { word: "Fierce", kind: WordType::Adjective, meaning: "Tez ya violent" },
    WordListEntry { word: "Figure", kind: WordType::Verb, meaning: "Samajh lena" },
    WordListEntry { word: "Flatter", kind: WordType::Verb, meaning: "Nakal se tareef karna" },
    WordListEntry { word: "Flawless", kind: WordType::Adjective, meaning: "Bilkul perfect" },
    WordListEntry { word: "Flourish", kind: WordType::Verb, meaning: "Taraqqi karna" },
    WordListEntry { word: "Focus", kind: WordType::Verb, meaning: "Dhyaan lagana" },
    WordListEntry { word: "Forbid", kind: WordType::Verb, meaning: "Mana karna" },
    WordListEntry { word: "Forecast", kind: WordType::Verb, meaning: "Pehle se batana" },
    WordListEntry { word: "Forge", kind: WordType::Verb, meaning: "Banana ya strong relation banana" },
    WordListEntry { word: "Formulate", kind: WordType::Verb, meaning: "Plan banana" },
    WordListEntry { word: "Fortunate", kind: WordType::Adjective, meaning: "Lucky" },
    WordListEntry { word: "Foster", kind: WordType::Verb, meaning: "Vikas karna" },
    WordListEntry { word: "Fragment", kind: WordType::Noun, meaning: "Chhota tukda" },
    WordListEntry { word: "Frankly", kind: WordType::Adverb, meaning: "Sacchai se" },
    WordListEntry { word: "Fulfill", kind: WordType::Verb, meaning: "Pura karna" },
    WordListEntry { word: "Function", kind: WordType::Verb, meaning: "Kaam karna" },
    WordListEntry { word: "Fundamental", kind: WordType::Adjective, meaning: "Basic ya buniyadi" },
    WordListEntry { word: "Furious", kind: WordType::Adjective, meaning: "Bahut gussa" },
    WordListEntry { word: "Regret", kind: WordType::Verb, meaning: "Pachtana ya afsos karna" },
    WordListEntry { word: "Reinforce", kind: WordType::Verb, meaning: "Aur majboot banana" },
    WordListEntry { word: "Reject", kind: WordType::Verb, meaning: "Mana kar dena ya swikar na karna" },
    WordListEntry { word: "Relative", kind: WordType::Noun, meaning: "Rishtedaar" },
    WordListEntry { word: "Relax", kind: WordType::Verb, meaning: "Aaram karna" },
    WordListEntry { word: "Reliable", kind: WordType::Adjective, meaning: "Jis par bharosa kiya ja sake" },
    WordListEntry { word: "Relief", kind: WordType::Noun, meaning: "Sukoon ya rahat" },
    WordListEntry { word: "Reluctant", kind: WordType::Adjective, meaning: "Mann na hona ya hichkichahat" },
    WordListEntry { word: "Remarkable", kind: WordType::Adjective, meaning: "Shaandar ya yaadgaar" },
    WordListEntry { word: "Remedy", kind: WordType::Noun, meaning: "Upay ya ilaaj" },
    WordListEntry { word: "Remote", kind: WordType::Adjective, meaning: "Door daraz" },
    WordListEntry { word: "Renew", kind: WordType::Verb, meaning: "Dobara update ya fresh karna" },
    WordListEntry { word: "Represent", kind: WordType::Verb, meaning: "Pratinidhitv karna" },
    WordListEntry { word: "Reputation", kind: WordType::Noun, meaning: "Imaandari ya chavi" },
    WordListEntry { word: "Rescue", kind: WordType::Verb, meaning: "Bachana ya madad karna" },
    WordListEntry { word: "Research", kind: WordType::Noun, meaning: "Khoj ya adhyan" },
    WordListEntry { word: "Resemble", kind: WordType::Verb, meaning: "Milta julta hona" },
    WordListEntry { word: "Reserve", kind: WordType::Verb, meaning: "Book karna ya rakh karna" },
    WordListEntry { word: "Resident", kind: WordType::Noun, meaning: "Nivaasi" },
    WordListEntry { word: "Resign", kind: WordType::Verb, meaning: "Naukri chhodna" },
    WordListEntry { word: "Resist", kind: WordType::Verb, meaning: "Virodh karna ya rokna" },
    WordListEntry { word: "Resolve", kind: WordType::Verb, meaning: "Samadhan karna" },
    WordListEntry { word: "Resource", kind: WordType::Noun, meaning: "Saadhan ya upyogi cheez" },
    WordListEntry { word: "Respect", kind: WordType::Verb, meaning: "Samman dena" },
    WordListEntry { word: "Restore", kind: WordType::Verb, meaning: "Wapas purani condition mein lana" },
    WordListEntry { word: "Restrict", kind: WordType::Verb, meaning: "Rokna ya limit karna" },
    WordListEntry { word: "Result", kind: WordType::Noun, meaning: "Nateeja" },
    WordListEntry { word: "Retire", kind: WordType::Verb, meaning: "Kaam se alag hona" },
    WordListEntry { word: "Reveal", kind: WordType::Verb, meaning: "Kholna ya batana" },
    WordListEntry { word: "Revenue", kind: WordType::Noun, meaning: "Aamdani ya kamai" },
    WordListEntry { word: "Reverse", kind: WordType::Verb, meaning: "Palatna ya ulta karna" },
    WordListEntry { word: "Review", kind: WordType::Verb, meaning: "Dobara dekhna ya analyse karna" },
    WordListEntry { word: "Revolution", kind: WordType::Noun, meaning: "Krantikari parivartan" },
    WordListEntry { word: "Rigid", kind: WordType::Adjective, meaning: "Kathor ya na badalne wala" },
    WordListEntry { word: "Rival", kind: WordType::Noun, meaning: "Pratiyogi ya dusman jaisa competitor" },
    WordListEntry { word: "Sacrifice", kind: WordType::Noun, meaning: "Balidaan" },
    WordListEntry { word: "Satisfied", kind: WordType::Adjective, meaning: "Khush ya santusht" },
    WordListEntry { word: "Scattered", kind: WordType::Adjective, meaning: "Idhar-udhar faila hua" },
    WordListEntry { word: "Schedule", kind: WordType::Noun, meaning: "Time-table ya yojna" },
    WordListEntry { word: "Scheme", kind: WordType::Noun, meaning: "Yojna ya plan" },
    WordListEntry { word: "Scholar", kind: WordType::Noun, meaning: "Gyaani ya vidvaan" },
    WordListEntry { word: "Scope", kind: WordType::Noun, meaning: "Avsar ya sambhavana" },
    WordListEntry { word: "Scream", kind: WordType::Verb, meaning: "Chillana" },
    WordListEntry { word: "Secure", kind: WordType::Verb, meaning: "Surakshit karna" },
    WordListEntry { word: "Select", kind: WordType::Verb, meaning: "Chunana" },
    WordListEntry { word: "Sensitive", kind: WordType::Adjective, meaning: "Jaldi prabhavit hone wala" },
    WordListEntry { word: "Severe", kind: WordType::Adjective, meaning: "Bahut kathin ya serious" },
    WordListEntry { word: "Sincere", kind: WordType::Adjective, meaning: "Dil se imandaari dikhana" },
    WordListEntry { word: "Situate", kind: WordType::Verb, meaning: "Kisi jagah par rakhna" },
    WordListEntry { word: "Skeptical", kind: WordType::Adjective, meaning: "Shak karne wala" },
    WordListEntry { word: "Slight", kind: WordType::Adjective, meaning: "Thoda sa ya halka" },
    WordListEntry { word: "Solid", kind: WordType::Adjective, meaning: "Mazboot ya thos" },
    WordListEntry { word: "Solution", kind: WordType::Noun, meaning: "Samadhan" },
    WordListEntry { word: "Sophisticated", kind: WordType::Adjective, meaning: "Advanced ya classy" },
    WordListEntry { word: "Specify", kind: WordType::Verb, meaning: "Spasht tarah batana" },
    WordListEntry { word: "Stable", kind: WordType::Adjective, meaning: "Sthir ya na hilne wala" },
    WordListEntry { word: "Standard", kind: WordType::Noun, meaning: "Niyamit star" },
    WordListEntry { word: "Statistic", kind: WordType::Noun, meaning: "Data ya sankhiki" },
    WordListEntry { word: "Stimulate", kind: WordType::Verb, meaning: "Protsahan dena" },
    WordListEntry { word: "Strategic", kind: WordType::Adjective, meaning: "Yojna ke hisab se" },
    WordListEntry { word: "Strengthen", kind: WordType::Verb, meaning: "Mazboot banana" },
    WordListEntry { word: "Structure", kind: WordType::Noun, meaning: "Banawat ya vyavastha" },
    WordListEntry { word: "Struggle", kind: WordType::Verb, meaning: "Sangharsh karna" },
    WordListEntry { word: "Stubborn", kind: WordType::Adjective, meaning: "Ziddi" },
    WordListEntry { word: "Substantial", kind: WordType::Adjective, meaning: "Kaafi bada ya mahatvapurn" },
    WordListEntry { word: "Substitute", kind: WordType::Noun, meaning: "Badlaav ya replacement" },
    WordListEntry { word: "Sufficient", kind: WordType::Adjective, meaning: "Kaafi ya puri matra" },
    WordListEntry { word: "Summarize", kind: WordType::Verb, meaning: "Chhota sa saar batana" },
    WordListEntry { word: "Supervise", kind: WordType::Verb, meaning: "Nigrani karna" },
    WordListEntry { word: "Supportive", kind: WordType::Adjective, meaning: "Madad karne wala" },
    WordListEntry { word: "Survival", kind: WordType::Noun, meaning: "Zinda rehna ya bachna" },
    WordListEntry { word: "Suspend", kind: WordType::Verb, meaning: "Temporary rokna" },
    WordListEntry { word: "Sustain", kind: WordType::Verb, meaning: "Banaaye rakhna" },
    WordListEntry { word: "Symbolic", kind: WordType::Adjective, meaning: "Prateek roop mein" },
    WordListEntry { word: "Tactical", kind: WordType::Adjective, meaning: "Chalak yojna se" },
    WordListEntry { word: "Talent", kind: WordType::Noun, meaning: "Kshamta ya hunar" },
    WordListEntry { word: "Tension", kind: WordType::Noun, meaning: "Tanav ya chinta" },
    WordListEntry { word: "Terminate", kind: WordType::Verb, meaning: "Khatam karna" },
    WordListEntry { word: "Territory", kind: WordType::Noun, meaning: "Kshetra ya area" },
    WordListEntry { word: "Threaten", kind: WordType::Verb, meaning: "Dhamki dena" },
    WordListEntry { word: "Tolerate", kind: WordType::Verb, meaning: "Bardaasht karna" },
    WordListEntry { word: "Toxic", kind: WordType::Adjective, meaning: "Zahreele ya harmful" },
    WordListEntry { word: "Transform", kind: WordType::Verb, meaning: "Badal dena" },
    WordListEntry { word: "Transparent", kind: WordType::Adjective, meaning: "Bilkul saaf dikhai dene wala" },
    WordListEntry { word: "Trigger", kind: WordType::Verb, meaning: "Shuru kar dena ya cause karna" },
    WordListEntry { word: "Ultimate", kind: WordType::Adjective, meaning: "Antim ya sabse bada" },
    WordListEntry { word: "Uncertain", kind: WordType::Adjective, meaning: "Pakki jankari na hona" },
    WordListEntry { word: "Undergo", kind: WordType::Verb, meaning: "Kuch jhelna ya experience karna" },
    WordListEntry { word: "Uniform", kind: WordType::Adjective, meaning: "Ek jaisa" },
    WordListEntry { word: "Unique", kind: WordType::Adjective, meaning: "Alag ya khaas" },
    WordListEntry { word: "Universal", kind: WordType::Adjective, meaning: "Sabke liye ek samaan" },
    WordListEntry { word: "Urgent", kind: WordType::Adjective, meaning: "Bahut zaroori" },
    WordListEntry { word: "Vacant", kind: WordType::Adjective, meaning: "Khaali jagah" },
    WordListEntry { word: "Valid", kind: WordType::Adjective, meaning: "Sahi ya kanooni roop se theek" },
    WordListEntry { word: "Vanish", kind: WordType::Verb, meaning: "Gaayab ho jaana" },
    WordListEntry { word: "Vast", kind: WordType::Adjective, meaning: "Bahut bada ya vistrit" },
    WordListEntry { word: "Venture", kind: WordType::Noun, meaning: "Jua lena ya risky kaam" },
    WordListEntry { word: "Verbal", kind: WordType::Adjective, meaning: "Boli ya words se juda" },
    WordListEntry { word: "Vibrant", kind: WordType::Adjective, meaning: "Energetic aur colourful" },
    WordListEntry { word: "Vicious", kind: WordType::Adjective, meaning: "Bura ya violent" },
    WordListEntry { word: "Visible", kind: WordType::Adjective, meaning: "Dikhai dene wala" },
    WordListEntry { word: "Vital", kind: WordType::Adjective, meaning: "Bahut zaroori" },
    WordListEntry { word: "Voluntary", kind: WordType::Adjective, meaning: "Apni marzi se kiya hua" },
    WordListEntry { word: "Vulnerable", kind: WordType::Adjective, meaning: "Asani se hurt ho sakne wala" },
    WordListEntry { word: "Wisdom", kind: WordType::Noun, meaning: "Gyaan aur samajh" },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_list_keeps_every_source_entry() {
        assert_eq!(WORD_LIST.len(), 450);

        // 同じ単語でも意味が違えば別の行として残る
        let adapt: Vec<_> = WORD_LIST
            .iter()
            .filter(|e| e.word == "Adapt")
            .map(|e| e.meaning)
            .collect();
        assert!(adapt.contains(&"Naye situation mein dhal jaana"));
        assert!(adapt.contains(&"Adjust ho jaana"));
    }

    #[test]
    fn every_word_type_is_present() {
        for kind in WordType::ALL {
            assert!(WORD_LIST.iter().any(|e| e.kind == kind), "missing {kind}");
        }
    }

    #[test]
    fn display_text_contains_all_fields() {
        let entry = WORD_LIST[0];
        let text = entry.display_text();
        assert!(text.contains(entry.word));
        assert!(text.contains(entry.kind.as_str()));
        assert!(text.contains(entry.meaning));
    }

    #[test]
    fn fixtures_are_not_empty() {
        assert_eq!(FLASHCARDS.len(), 5);
        assert_eq!(DAILY_WORDS.len(), 3);
    }
}
