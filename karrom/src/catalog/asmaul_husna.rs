//! Bundled table of the 99 names of Allah.

/// One of the 99 names, ready for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AsmaulHusna {
    /// Traditional position, 1..=99.
    pub index: u16,
    pub arabic: String,
    pub latin: String,
    pub meaning_id: String,
    pub meaning_en: String,
}

/// Number of names.
pub const ASMAUL_HUSNA_COUNT: usize = 99;

/// (Arabic, transliteration, Indonesian meaning, English meaning),
/// in traditional order.
#[rustfmt::skip]
static BUNDLED: [(&str, &str, &str, &str); ASMAUL_HUSNA_COUNT] = [
    ("الرَّحْمَنُ", "Ar Rahman", "Yang Maha Pengasih", "The Most Gracious"),
    ("الرَّحِيمُ", "Ar Rahiim", "Yang Maha Penyayang", "The Most Merciful"),
    ("الْمَلِكُ", "Al Malik", "Yang Maha Merajai", "The King"),
    ("الْقُدُّوسُ", "Al Quddus", "Yang Maha Suci", "The Most Holy"),
    ("السَّلَامُ", "As Salaam", "Yang Maha Memberi Kesejahteraan", "The Source of Peace"),
    ("الْمُؤْمِنُ", "Al Mu'min", "Yang Maha Memberi Keamanan", "The Giver of Faith"),
    ("الْمُهَيْمِنُ", "Al Muhaimin", "Yang Maha Pemelihara", "The Guardian"),
    ("الْعَزِيزُ", "Al 'Aziiz", "Yang Maha Perkasa", "The Almighty"),
    ("الْجَبَّارُ", "Al Jabbar", "Yang Memiliki Mutlak Kegagahan", "The Compeller"),
    ("الْمُتَكَبِّرُ", "Al Mutakabbir", "Yang Maha Megah", "The Supreme"),
    ("الْخَالِقُ", "Al Khaliq", "Yang Maha Pencipta", "The Creator"),
    ("الْبَارِئُ", "Al Baari'", "Yang Maha Melepaskan", "The Evolver"),
    ("الْمُصَوِّرُ", "Al Mushawwir", "Yang Maha Membentuk Rupa", "The Fashioner"),
    ("الْغَفَّارُ", "Al Ghaffaar", "Yang Maha Pengampun", "The Ever Forgiving"),
    ("الْقَهَّارُ", "Al Qahhaar", "Yang Maha Menundukkan", "The Subduer"),
    ("الْوَهَّابُ", "Al Wahhaab", "Yang Maha Pemberi Karunia", "The Bestower"),
    ("الرَّزَّاقُ", "Ar Razzaaq", "Yang Maha Pemberi Rezeki", "The Provider"),
    ("الْفَتَّاحُ", "Al Fattaah", "Yang Maha Pembuka Rahmat", "The Opener"),
    ("الْعَلِيمُ", "Al 'Aliim", "Yang Maha Mengetahui", "The All-Knowing"),
    ("الْقَابِضُ", "Al Qaabidh", "Yang Maha Menyempitkan", "The Withholder"),
    ("الْبَاسِطُ", "Al Baasith", "Yang Maha Melapangkan", "The Extender"),
    ("الْخَافِضُ", "Al Khaafidh", "Yang Maha Merendahkan", "The Reducer"),
    ("الرَّافِعُ", "Ar Raafi'", "Yang Maha Meninggikan", "The Exalter"),
    ("الْمُعِزُّ", "Al Mu'izz", "Yang Maha Memuliakan", "The Honourer"),
    ("الْمُذِلُّ", "Al Mudzil", "Yang Maha Menghinakan", "The Dishonourer"),
    ("السَّمِيعُ", "As Samii'", "Yang Maha Mendengar", "The All-Hearing"),
    ("الْبَصِيرُ", "Al Bashiir", "Yang Maha Melihat", "The All-Seeing"),
    ("الْحَكَمُ", "Al Hakam", "Yang Maha Menetapkan", "The Judge"),
    ("الْعَدْلُ", "Al 'Adl", "Yang Maha Adil", "The Just"),
    ("اللَّطِيفُ", "Al Lathiif", "Yang Maha Lembut", "The Subtle One"),
    ("الْخَبِيرُ", "Al Khabiir", "Yang Maha Mengenal", "The All-Aware"),
    ("الْحَلِيمُ", "Al Haliim", "Yang Maha Penyantun", "The Forbearing"),
    ("الْعَظِيمُ", "Al 'Azhiim", "Yang Maha Agung", "The Magnificent"),
    ("الْغَفُورُ", "Al Ghafuur", "Yang Maha Memberi Pengampunan", "The All-Forgiving"),
    ("الشَّكُورُ", "As Syakuur", "Yang Maha Pembalas Budi", "The Appreciative"),
    ("الْعَلِيُّ", "Al 'Aliy", "Yang Maha Tinggi", "The Most High"),
    ("الْكَبِيرُ", "Al Kabiir", "Yang Maha Besar", "The Most Great"),
    ("الْحَفِيظُ", "Al Hafizh", "Yang Maha Memelihara", "The Preserver"),
    ("الْمُقِيتُ", "Al Muqiit", "Yang Maha Pemberi Kecukupan", "The Sustainer"),
    ("الْحَسِيبُ", "Al Hasiib", "Yang Maha Membuat Perhitungan", "The Reckoner"),
    ("الْجَلِيلُ", "Al Jaliil", "Yang Maha Luhur", "The Majestic"),
    ("الْكَرِيمُ", "Al Kariim", "Yang Maha Pemurah", "The Most Generous"),
    ("الرَّقِيبُ", "Ar Raqiib", "Yang Maha Mengawasi", "The Watchful"),
    ("الْمُجِيبُ", "Al Mujiib", "Yang Maha Mengabulkan", "The Responsive"),
    ("الْوَاسِعُ", "Al Waasi'", "Yang Maha Luas", "The All-Encompassing"),
    ("الْحَكِيمُ", "Al Hakiim", "Yang Maha Bijaksana", "The All-Wise"),
    ("الْوَدُودُ", "Al Waduud", "Yang Maha Mengasihi", "The Loving"),
    ("الْمَجِيدُ", "Al Majiid", "Yang Maha Mulia", "The Glorious"),
    ("الْبَاعِثُ", "Al Baa'its", "Yang Maha Membangkitkan", "The Resurrector"),
    ("الشَّهِيدُ", "As Syahiid", "Yang Maha Menyaksikan", "The Witness"),
    ("الْحَقُّ", "Al Haqq", "Yang Maha Benar", "The Truth"),
    ("الْوَكِيلُ", "Al Wakiil", "Yang Maha Memelihara Penyerahan", "The Trustee"),
    ("الْقَوِيُّ", "Al Qawiyyu", "Yang Maha Kuat", "The Most Strong"),
    ("الْمَتِينُ", "Al Matiin", "Yang Maha Kokoh", "The Firm"),
    ("الْوَلِيُّ", "Al Waliyy", "Yang Maha Melindungi", "The Protecting Friend"),
    ("الْحَمِيدُ", "Al Hamiid", "Yang Maha Terpuji", "The Praiseworthy"),
    ("الْمُحْصِي", "Al Muhshii", "Yang Maha Mengkalkulasi", "The Accounter"),
    ("الْمُبْدِئُ", "Al Mubdi'", "Yang Maha Memulai", "The Originator"),
    ("الْمُعِيدُ", "Al Mu'iid", "Yang Maha Mengembalikan Kehidupan", "The Restorer"),
    ("الْمُحْيِي", "Al Muhyii", "Yang Maha Menghidupkan", "The Giver of Life"),
    ("الْمُمِيتُ", "Al Mumiitu", "Yang Maha Mematikan", "The Bringer of Death"),
    ("الْحَيُّ", "Al Hayyu", "Yang Maha Hidup", "The Ever-Living"),
    ("الْقَيُّومُ", "Al Qayyuum", "Yang Maha Mandiri", "The Self-Subsisting"),
    ("الْوَاجِدُ", "Al Waajid", "Yang Maha Penemu", "The Perceiver"),
    ("الْمَاجِدُ", "Al Maajid", "Yang Maha Mulia", "The Illustrious"),
    ("الْوَاحِدُ", "Al Wahiid", "Yang Maha Tunggal", "The One"),
    ("الْأَحَدُ", "Al Ahad", "Yang Maha Esa", "The Unique"),
    ("الصَّمَدُ", "As Shamad", "Yang Maha Dibutuhkan", "The Eternal Refuge"),
    ("الْقَادِرُ", "Al Qaadir", "Yang Maha Menentukan", "The Capable"),
    ("الْمُقْتَدِرُ", "Al Muqtadir", "Yang Maha Berkuasa", "The Omnipotent"),
    ("الْمُقَدِّمُ", "Al Muqaddim", "Yang Maha Mendahulukan", "The Expediter"),
    ("الْمُؤَخِّرُ", "Al Mu'akkhir", "Yang Maha Mengakhirkan", "The Delayer"),
    ("الْأَوَّلُ", "Al Awwal", "Yang Maha Awal", "The First"),
    ("الْآخِرُ", "Al Aakhir", "Yang Maha Akhir", "The Last"),
    ("الظَّاهِرُ", "Az Zhaahir", "Yang Maha Nyata", "The Manifest"),
    ("الْبَاطِنُ", "Al Baathin", "Yang Maha Ghaib", "The Hidden"),
    ("الْوَالِي", "Al Waali", "Yang Maha Memerintah", "The Governor"),
    ("الْمُتَعَالِي", "Al Muta'aalii", "Yang Maha Tinggi", "The Self-Exalted"),
    ("الْبَرُّ", "Al Barr", "Yang Maha Penderma", "The Source of Goodness"),
    ("التَّوَّابُ", "At Tawwaab", "Yang Maha Penerima Tobat", "The Ever-Accepting of Repentance"),
    ("الْمُنْتَقِمُ", "Al Muntaqim", "Yang Maha Pemberi Balasan", "The Avenger"),
    ("الْعَفُوُّ", "Al Afuww", "Yang Maha Pemaaf", "The Pardoner"),
    ("الرَّءُوفُ", "Ar Ra'uuf", "Yang Maha Pengasuh", "The Most Kind"),
    ("مَالِكُ الْمُلْكِ", "Malikul Mulk", "Yang Maha Penguasa Kerajaan", "Owner of Sovereignty"),
    ("ذُو الْجَلَالِ وَالْإِكْرَامِ", "Dzul Jalaali Wal Ikraam", "Yang Maha Pemilik Kebesaran dan Kemuliaan", "Lord of Majesty and Generosity"),
    ("الْمُقْسِطُ", "Al Muqsith", "Yang Maha Pemberi Keadilan", "The Equitable"),
    ("الْجَامِعُ", "Al Jaami'", "Yang Maha Mengumpulkan", "The Gatherer"),
    ("الْغَنِيُّ", "Al Ghaniyy", "Yang Maha Kaya", "The Self-Sufficient"),
    ("الْمُغْنِي", "Al Mughnii", "Yang Maha Pemberi Kekayaan", "The Enricher"),
    ("الْمَانِعُ", "Al Maani'", "Yang Maha Mencegah", "The Preventer"),
    ("الضَّارُّ", "Ad Dhaar", "Yang Maha Penimpa Kemudharatan", "The Distresser"),
    ("النَّافِعُ", "An Nafii'", "Yang Maha Memberi Manfaat", "The Benefactor"),
    ("النُّورُ", "An Nuur", "Yang Maha Bercahaya", "The Light"),
    ("الْهَادِي", "Al Haadii", "Yang Maha Pemberi Petunjuk", "The Guide"),
    ("الْبَدِيعُ", "Al Badii'", "Yang Maha Pencipta Tiada Bandingannya", "The Incomparable Originator"),
    ("الْبَاقِي", "Al Baaqii", "Yang Maha Kekal", "The Everlasting"),
    ("الْوَارِثُ", "Al Waarits", "Yang Maha Pewaris", "The Inheritor"),
    ("الرَّشِيدُ", "Ar Rasyiid", "Yang Maha Pandai", "The Guide to the Right Path"),
    ("الصَّبُورُ", "As Shabuur", "Yang Maha Sabar", "The Patient"),
];

fn to_name(position: usize) -> AsmaulHusna {
    let (arabic, latin, meaning_id, meaning_en) = BUNDLED[position];
    AsmaulHusna {
        index: position as u16 + 1,
        arabic: arabic.to_string(),
        latin: latin.to_string(),
        meaning_id: meaning_id.to_string(),
        meaning_en: meaning_en.to_string(),
    }
}

/// All 99 names from the bundled table, in traditional order.
pub fn bundled_asmaul_husna() -> Vec<AsmaulHusna> {
    (0..ASMAUL_HUSNA_COUNT).map(to_name).collect()
}

/// One name by its 1-based index.
pub fn bundled_name(index: u16) -> Option<AsmaulHusna> {
    let position = (index as usize).checked_sub(1)?;
    (position < ASMAUL_HUSNA_COUNT).then(|| to_name(position))
}
