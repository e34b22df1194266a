//! Bundled daily prayers (doa harian).

use crate::locale::Language;

/// A short supplication for a daily activity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DailyPrayer {
    pub id: u16,
    pub title_id: &'static str,
    pub title_en: &'static str,
    pub arabic: &'static str,
    pub latin: &'static str,
    pub translation_id: &'static str,
    pub translation_en: &'static str,
}

impl DailyPrayer {
    pub fn title(&self, language: Language) -> &'static str {
        language.pick(self.title_id, self.title_en)
    }

    pub fn translation(&self, language: Language) -> &'static str {
        language.pick(self.translation_id, self.translation_en)
    }
}

/// Number of bundled daily prayers.
pub const DAILY_PRAYER_COUNT: usize = 20;

/// Looks up a daily prayer by id.
pub fn daily_prayer(id: u16) -> Option<&'static DailyPrayer> {
    DAILY_PRAYERS.iter().find(|prayer| prayer.id == id)
}

/// All bundled daily prayers, ordered by id.
pub static DAILY_PRAYERS: [DailyPrayer; DAILY_PRAYER_COUNT] = [
    DailyPrayer {
        id: 1,
        title_id: "Doa Sebelum Makan",
        title_en: "Prayer Before Eating",
        arabic: "اَللّٰهُمَّ بَارِكْ لَنَا فِيمَا رَزَقْتَنَا وَقِنَا عَذَابَ النَّارِ",
        latin: "Allahumma baarik lanaa fiimaa rozaqtanaa wa qinaa 'adzaaban naar",
        translation_id: "Ya Allah, berkahilah kami dalam rezeki yang telah Engkau berikan kepada kami dan peliharalah kami dari siksa api neraka",
        translation_en: "O Allah, bless us in what You have provided for us and save us from the punishment of the Fire",
    },
    DailyPrayer {
        id: 2,
        title_id: "Doa Sesudah Makan",
        title_en: "Prayer After Eating",
        arabic: "اَلْحَمْدُ ِللهِ الَّذِىْ اَطْعَمَنَا وَسَقَانَا وَجَعَلَنَا مُسْلِمِيْنَ",
        latin: "Alhamdulillaahil ladzi ath'amanaa wa saqoonaa wa ja'alanaa muslimiin",
        translation_id: "Segala puji bagi Allah yang telah memberi makan kami dan minuman kami, serta menjadikan kami sebagai orang-orang islam",
        translation_en: "Praise be to Allah Who has fed us and given us drink, and made us Muslims",
    },
    DailyPrayer {
        id: 3,
        title_id: "Doa Sebelum Tidur",
        title_en: "Prayer Before Sleeping",
        arabic: "بِسْمِكَ اللّهُمَّ اَحْيَا وَ بِسْمِكَ اَمُوْتُ",
        latin: "Bismikalloohumma ahyaa wa bismika amuut",
        translation_id: "Dengan nama-Mu ya Allah aku hidup, dan dengan nama-Mu aku mati",
        translation_en: "In Your Name, O Allah, I live and I die",
    },
    DailyPrayer {
        id: 4,
        title_id: "Doa Bangun Tidur",
        title_en: "Prayer After Waking Up",
        arabic: "اَلْحَمْدُ ِللهِ الَّذِىْ اَحْيَانَا بَعْدَمَا اَمَاتَنَا وَاِلَيْهِ النُّشُوْرُ",
        latin: "Alhamdulillaahil ladzi ahyaanaa ba'da maa amaatanaa wa ilaihin nusyuur",
        translation_id: "Segala puji bagi Allah yang telah menghidupkan kami sesudah kami mati (membangunkan dari tidur) dan hanya kepada-Nya kami dikembalikan",
        translation_en: "Praise is to Allah Who gives us life after He has caused us to die and to Him is the return",
    },
    DailyPrayer {
        id: 5,
        title_id: "Doa Masuk Masjid",
        title_en: "Prayer Entering Mosque",
        arabic: "اَللّٰهُمَّ افْتَحْ لِيْ اَبْوَابَ رَحْمَتِكَ",
        latin: "Allahummaf tahlii abwaaba rohmatik",
        translation_id: "Ya Allah, bukalah untukku pintu-pintu rahmat-Mu",
        translation_en: "O Allah, open for me the doors of Your mercy",
    },
    DailyPrayer {
        id: 6,
        title_id: "Doa Keluar Masjid",
        title_en: "Prayer Exiting Mosque",
        arabic: "اَللّٰهُمَّ اِنِّى اَسْأَلُكَ مِنْ فَضْلِكَ",
        latin: "Allahumma innii as-aluka min fadhlik",
        translation_id: "Ya Allah, sesungguhnya aku memohon keutamaan dari-Mu",
        translation_en: "O Allah, I ask You from Your bounty",
    },
    DailyPrayer {
        id: 7,
        title_id: "Doa Masuk Kamar Mandi",
        title_en: "Prayer Entering Toilet",
        arabic: "اَللّٰهُمَّ اِنِّيْ اَعُوْذُ بِكَ مِنَ الْخُبُثِ وَالْخَبَآئِثِ",
        latin: "Allahumma innii a'uudzu bika minal khubutsi wal khobaaits",
        translation_id: "Ya Allah, sesungguhnya aku berlindung kepada-Mu dari godaan syetan laki-laki dan perempuan",
        translation_en: "O Allah, I seek refuge with You from all evil and evil-doers",
    },
    DailyPrayer {
        id: 8,
        title_id: "Doa Keluar Kamar Mandi",
        title_en: "Prayer Exiting Toilet",
        arabic: "غُفْرَانَكَ الْحَمْدُ ِللهِ الَّذِىْ اَذْهَبَ عَنِّى الْاَذَى وَعَافَانِى",
        latin: "Ghufroonakal hamdu lillaahil ladzii adzhaba 'annil adzaa wa 'aafaanii",
        translation_id: "Dengan mengharap ampunan-Mu, segala puji milik Allah yang telah menghilangkan kotoran dari badanku dan yang telah menyejahterakan",
        translation_en: "I ask Your forgiveness. Praise be to Allah who removed the harm from me and gave me health",
    },
    DailyPrayer {
        id: 9,
        title_id: "Doa Memakai Pakaian",
        title_en: "Prayer Wearing Clothes",
        arabic: "بِسْمِ اللهِ اَللّٰهُمَّ اِنِّى اَسْأَلُكَ مِنْ خَيْرِهِ وَخَيْرِ مَاهُوَ لَهُ وَاَعُوْذُ بِكَ مِنْ شَرِّهِ وَشَرِّ مَاهُوَ لَهُ",
        latin: "Bismillaahi, Alloohumma innii as-aluka min khoirihi wa khoiri maa huwa lahu, wa a'uudzu bika min syarrihi wa syarri maa huwa lahu",
        translation_id: "Dengan nama-Mu ya Allah aku minta kepada Engkau kebaikan pakaian ini dan kebaikan apa yang ada padanya, dan aku berlindung kepada Engkau dari kejahatan pakaian ini dan kejahatan yang ada padanya",
        translation_en: "In the name of Allah. O Allah, I ask You for the good of it and the good of what it is for, and I seek refuge in You from the evil of it and the evil of what it is for",
    },
    DailyPrayer {
        id: 10,
        title_id: "Doa Bercermin",
        title_en: "Prayer Looking in Mirror",
        arabic: "اَللّٰهُمَّ كَمَا حَسَّنْتَ خَلْقِيْ فَحَسِّنْ خُلُقِيْ",
        latin: "Allahumma kamaa hassanta kholqii fahassin khuluqii",
        translation_id: "Ya Allah, sebagaimana Engkau telah membaguskan penciptaanku, maka baguskanlah pula akhlakku",
        translation_en: "O Allah, just as You have made my creation good, make my character good",
    },
    DailyPrayer {
        id: 11,
        title_id: "Doa Keluar Rumah",
        title_en: "Prayer Leaving House",
        arabic: "بِسْمِ اللهِ تَوَكَّلْتُ عَلَى اللهِ، لَا حَوْلَ وَلَا قُوَّةَ إِلَّا بِاللهِ",
        latin: "Bismillaahi tawakkaltu 'alallooh, laa hawla wa laa quwwata illaa billaah",
        translation_id: "Dengan nama Allah, aku bertawakkal kepada Allah. Tiada daya dan kekuatan kecuali dengan Allah",
        translation_en: "In the name of Allah, I place my trust in Allah. There is no might nor power except with Allah",
    },
    DailyPrayer {
        id: 12,
        title_id: "Doa Masuk Rumah",
        title_en: "Prayer Entering House",
        arabic: "بِسْمِ اللهِ وَلَجْنَا، وَبِسْمِ اللهِ خَرَجْنَا، وَعَلَى رَبِّنَا تَوَكَّلْنَا",
        latin: "Bismillaahi walajnaa wa bismillaahi khorojnaa wa 'alaa robbinaa tawakkalnaa",
        translation_id: "Dengan nama Allah kami masuk rumah, dengan nama Allah kami keluar rumah, dan kepada Tuhan kami, kami bertawakkal",
        translation_en: "In the name of Allah we enter, and in the name of Allah we leave, and upon our Lord we rely",
    },
    DailyPrayer {
        id: 13,
        title_id: "Doa Naik Kendaraan",
        title_en: "Prayer Riding Vehicle",
        arabic: "سُبْحَانَ الَّذِيْ سَخَّرَ لَنَا هَذَا وَمَا كُنَّا لَهُ مُقْرِنِيْنَ. وَإِنَّا إِلَى رَبِّنَا لَمُنْقَلِبُوْنَ",
        latin: "Subhaanal ladzii sakh-khoro lanaa haadzaa wa maa kunnaa lahu muqriniin. Wa innaa ilaa robbinaa lamunqolibuun",
        translation_id: "Maha Suci Tuhan yang telah menundukkan semua ini bagi kami padahal kami sebelumnya tidak mampu menguasainya, dan sesungguhnya kami akan kembali kepada Tuhan kami",
        translation_en: "Glory to Him who has subjected this to us, and we could not have otherwise subdued it. And indeed we, to our Lord, will return",
    },
    DailyPrayer {
        id: 14,
        title_id: "Doa Belajar",
        title_en: "Prayer Before Studying",
        arabic: "رَبِّ زِدْنِي عِلْمًا وَارْزُقْنِيْ فَهْمًا وَاجْعَلْنِيْ مِنَ الصَّالِحِيْنَ",
        latin: "Robbi zidnii 'ilman warzuqnii fahman waj'alnii minash shoolihiin",
        translation_id: "Ya Allah, tambahkanlah aku ilmu dan berikanlah aku rizqi akan kepahaman, dan jadikanlah aku termasuk golongan orang-orang yang sholeh",
        translation_en: "My Lord, increase me in knowledge and grant me understanding and include me among the righteous",
    },
    DailyPrayer {
        id: 15,
        title_id: "Doa Setelah Belajar",
        title_en: "Prayer After Studying",
        arabic: "اَللّٰهُمَّ اِنِّى اِسْتَوْدِعُكَ مَا عَلَّمْتَنِيْهِ فَارْدُدْهُ اِلَىَّ عِنْدَ حَاجَتِى وَلاَ تَنْسَنِيْهِ يَا رَبَّ الْعَالَمِيْنَ",
        latin: "Allaahumma innii istaudi'uka maa 'allamtaniihi fardud-hu ilayya 'inda haajatii wa laa tansaniihi yaa robbal 'alamiin",
        translation_id: "Ya Allah, sesungguhnya aku menitipkan kepada-Mu apa yang telah Engkau ajarkan kepadaku, maka kembalikanlah ia kepadaku ketika aku membutuhkannya. Dan janganlah Engkau lupakan aku daripadanya, ya Tuhan semesta alam",
        translation_en: "O Allah, I entrust You with what You have taught me, so return it to me when I need it and do not make me forget it, O Lord of the worlds",
    },
    DailyPrayer {
        id: 16,
        title_id: "Doa Menjenguk Orang Sakit",
        title_en: "Prayer Visiting Sick",
        arabic: "اللَّهُمَّ رَبَّ النَّاسِ أَذْهِبِ الْبَأْسَ اشْفِ أَنْتَ الشَّافِي لَا شَافِيَ إلَّا أَنْتَ شِفَاءً لَا يُغَادِرُ سَقْمًا",
        latin: "Allahumma rabban naas adzhibil ba’sa isyfi antash syaafi laa syaafiya illaa anta syifaa’an laa yughaadiru saqman",
        translation_id: "Ya Allah, Tuhan manusia, hilangkanlah penyakit ini, sembuhkanlah, Engkaulah Yang Maha Penyembuh, tidak ada kesembuhan kecuali kesembuhan dari-Mu, kesembuhan yang tidak meninggalkan penyakit",
        translation_en: "O Allah, Lord of mankind, remove the severity and cure. You are the Healer, there is no cure but Your cure, a cure that leaves no illness",
    },
    DailyPrayer {
        id: 17,
        title_id: "Doa Turun Hujan",
        title_en: "Prayer When Raining",
        arabic: "اللَّهُمَّ صَيِّبًا نَافِعًا",
        latin: "Allahumma shoyyiban naafi’an",
        translation_id: "Ya Allah, turunkanlah pada kami hujan yang bermanfaat",
        translation_en: "O Allah, may it be a beneficial rain",
    },
    DailyPrayer {
        id: 18,
        title_id: "Doa Ketika Mendengar Petir",
        title_en: "Prayer Hearing Thunder",
        arabic: "سُبْحَانَ الَّذِي يُسَبِّحُ الرَّعْدُ بِحَمْدِهِ وَالْمَلَائِكَةُ مِنْ خِيفَتِهِ",
        latin: "Subhaanalladzi yusabbihur ro’du bihamdihi wal malaaikatu min khiifatihi",
        translation_id: "Maha Suci Allah yang petir bertasbih dengan memuji-Nya dan para malaikat takut kepada-Nya",
        translation_en: "Glory be to Him whom thunder praises with His praise, and the angels from the fear of Him",
    },
    DailyPrayer {
        id: 19,
        title_id: "Doa Kebaikan Dunia Akhirat",
        title_en: "Prayer for Goodness",
        arabic: "رَبَّنَا آتِنَا فِي الدُّنْيَا حَسَنَةً وَفِي الْآخِرَةِ حَسَنَةً وَقِنَا عَذَابَ النَّارِ",
        latin: "Rabbanaa aatinaa fid dunyaa hasanah wa fil aakhirati hasanah wa qinaa 'adzaaban naar",
        translation_id: "Ya Tuhan kami, berilah kami kebaikan di dunia dan kebaikan di akhirat dan peliharalah kami dari siksa neraka",
        translation_en: "Our Lord, give us in this world [that which is] good and in the Hereafter [that which is] good and protect us from the punishment of the Fire",
    },
    DailyPrayer {
        id: 20,
        title_id: "Doa Untuk Kedua Orang Tua",
        title_en: "Prayer for Parents",
        arabic: "رَبِّ اغْفِرْ لِيْ وَلِوَالِدَيَّ وَارْحَمْهُمَا كَمَا رَبَّيَانِيْ صَغِيْرًا",
        latin: "Robbighfir lii wa li waalidayya warhamhumaa kamaa robbayaanii shoghiiroo",
        translation_id: "Ya Tuhanku, ampunilah dosaku dan dosa kedua orang tuaku, dan sayangilah keduanya sebagaimana mereka menyayangi aku di waktu kecil",
        translation_en: "My Lord, forgive me and my parents and have mercy upon them as they brought me up [when I was] small",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_sequential() {
        for (i, prayer) in DAILY_PRAYERS.iter().enumerate() {
            assert_eq!(prayer.id as usize, i + 1);
            assert!(!prayer.arabic.is_empty());
        }
    }

    #[test]
    fn test_localized_title() {
        let prayer = daily_prayer(1).unwrap();
        assert_eq!(prayer.title(Language::Indonesian), "Doa Sebelum Makan");
        assert_eq!(prayer.title(Language::English), "Prayer Before Eating");
    }

    #[test]
    fn test_unknown_id() {
        assert!(daily_prayer(0).is_none());
        assert!(daily_prayer(21).is_none());
    }
}
