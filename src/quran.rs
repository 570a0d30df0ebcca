// Copyright 2025 Fernando Borretti
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use serde::Serialize;

use crate::memorized::MemorizedSet;
use crate::stats::percentage;
use crate::types::page::PageId;
use crate::types::tier::Tier;

/// The number of pages in the standard Madani mushaf.
pub const MUSHAF_PAGES: u32 = 604;

#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Surah {
    pub number: u32,
    pub name: &'static str,
    pub start_page: u32,
    pub end_page: u32,
}

impl Surah {
    const fn new(number: u32, name: &'static str, start_page: u32, end_page: u32) -> Self {
        Self {
            number,
            name,
            start_page,
            end_page,
        }
    }

    pub fn total_pages(&self) -> u32 {
        self.end_page - self.start_page + 1
    }

    fn pages(&self) -> impl Iterator<Item = PageId> {
        (self.start_page..=self.end_page).filter_map(|n| PageId::new(n).ok())
    }
}

/// The surahs with their page ranges. Adjacent surahs may share a page.
pub const SURAHS: [Surah; 114] = [
    Surah::new(1, "Al-Fatihah", 1, 1),
    Surah::new(2, "Al-Baqarah", 2, 49),
    Surah::new(3, "Aal-E-Imran", 50, 76),
    Surah::new(4, "An-Nisa", 77, 106),
    Surah::new(5, "Al-Maidah", 106, 127),
    Surah::new(6, "Al-An'am", 128, 150),
    Surah::new(7, "Al-A'raf", 151, 176),
    Surah::new(8, "Al-Anfal", 177, 186),
    Surah::new(9, "At-Tawbah", 187, 207),
    Surah::new(10, "Yunus", 208, 220),
    Surah::new(11, "Hud", 221, 234),
    Surah::new(12, "Yusuf", 235, 248),
    Surah::new(13, "Ar-Ra'd", 249, 255),
    Surah::new(14, "Ibrahim", 255, 261),
    Surah::new(15, "Al-Hijr", 262, 267),
    Surah::new(16, "An-Nahl", 267, 281),
    Surah::new(17, "Al-Isra", 282, 293),
    Surah::new(18, "Al-Kahf", 293, 304),
    Surah::new(19, "Maryam", 305, 311),
    Surah::new(20, "Taha", 312, 321),
    Surah::new(21, "Al-Anbiya", 322, 331),
    Surah::new(22, "Al-Hajj", 332, 341),
    Surah::new(23, "Al-Mu'minun", 342, 349),
    Surah::new(24, "An-Nur", 350, 359),
    Surah::new(25, "Al-Furqan", 359, 366),
    Surah::new(26, "Ash-Shu'ara", 367, 376),
    Surah::new(27, "An-Naml", 377, 385),
    Surah::new(28, "Al-Qasas", 385, 396),
    Surah::new(29, "Al-Ankabut", 396, 404),
    Surah::new(30, "Ar-Rum", 404, 410),
    Surah::new(31, "Luqman", 411, 414),
    Surah::new(32, "As-Sajdah", 415, 417),
    Surah::new(33, "Al-Ahzab", 418, 427),
    Surah::new(34, "Saba", 428, 434),
    Surah::new(35, "Fatir", 434, 440),
    Surah::new(36, "Ya-Sin", 440, 445),
    Surah::new(37, "As-Saffat", 446, 452),
    Surah::new(38, "Sad", 453, 458),
    Surah::new(39, "Az-Zumar", 458, 467),
    Surah::new(40, "Ghafir", 467, 476),
    Surah::new(41, "Fussilat", 477, 482),
    Surah::new(42, "Ash-Shuraa", 483, 489),
    Surah::new(43, "Az-Zukhruf", 489, 495),
    Surah::new(44, "Ad-Dukhan", 496, 498),
    Surah::new(45, "Al-Jathiyah", 499, 502),
    Surah::new(46, "Al-Ahqaf", 502, 506),
    Surah::new(47, "Muhammad", 507, 510),
    Surah::new(48, "Al-Fath", 511, 515),
    Surah::new(49, "Al-Hujurat", 515, 517),
    Surah::new(50, "Qaf", 518, 520),
    Surah::new(51, "Adh-Dhariyat", 520, 523),
    Surah::new(52, "At-Tur", 523, 525),
    Surah::new(53, "An-Najm", 526, 528),
    Surah::new(54, "Al-Qamar", 528, 531),
    Surah::new(55, "Ar-Rahman", 531, 534),
    Surah::new(56, "Al-Waqi'ah", 534, 537),
    Surah::new(57, "Al-Hadid", 537, 541),
    Surah::new(58, "Al-Mujadila", 542, 545),
    Surah::new(59, "Al-Hashr", 545, 548),
    Surah::new(60, "Al-Mumtahanah", 549, 551),
    Surah::new(61, "As-Saff", 551, 552),
    Surah::new(62, "Al-Jumu'ah", 553, 554),
    Surah::new(63, "Al-Munafiqun", 554, 555),
    Surah::new(64, "At-Taghabun", 556, 557),
    Surah::new(65, "At-Talaq", 558, 559),
    Surah::new(66, "At-Tahrim", 560, 561),
    Surah::new(67, "Al-Mulk", 562, 564),
    Surah::new(68, "Al-Qalam", 564, 566),
    Surah::new(69, "Al-Haqqah", 566, 568),
    Surah::new(70, "Al-Ma'arij", 568, 570),
    Surah::new(71, "Nuh", 570, 571),
    Surah::new(72, "Al-Jinn", 572, 573),
    Surah::new(73, "Al-Muzzammil", 574, 575),
    Surah::new(74, "Al-Muddaththir", 575, 577),
    Surah::new(75, "Al-Qiyamah", 577, 578),
    Surah::new(76, "Al-Insan", 578, 580),
    Surah::new(77, "Al-Mursalat", 580, 581),
    Surah::new(78, "An-Naba", 582, 583),
    Surah::new(79, "An-Nazi'at", 583, 584),
    Surah::new(80, "Abasa", 585, 585),
    Surah::new(81, "At-Takwir", 586, 586),
    Surah::new(82, "Al-Infitar", 587, 587),
    Surah::new(83, "Al-Mutaffifin", 587, 589),
    Surah::new(84, "Al-Inshiqaq", 589, 589),
    Surah::new(85, "Al-Buruj", 590, 590),
    Surah::new(86, "At-Tariq", 591, 591),
    Surah::new(87, "Al-A'la", 591, 591),
    Surah::new(88, "Al-Ghashiyah", 592, 592),
    Surah::new(89, "Al-Fajr", 593, 594),
    Surah::new(90, "Al-Balad", 594, 594),
    Surah::new(91, "Ash-Shams", 595, 595),
    Surah::new(92, "Al-Layl", 595, 596),
    Surah::new(93, "Ad-Duhaa", 596, 596),
    Surah::new(94, "Ash-Sharh", 596, 596),
    Surah::new(95, "At-Tin", 597, 597),
    Surah::new(96, "Al-Alaq", 597, 597),
    Surah::new(97, "Al-Qadr", 598, 598),
    Surah::new(98, "Al-Bayyinah", 598, 598),
    Surah::new(99, "Az-Zalzalah", 599, 599),
    Surah::new(100, "Al-Adiyat", 599, 599),
    Surah::new(101, "Al-Qari'ah", 600, 600),
    Surah::new(102, "At-Takathur", 600, 600),
    Surah::new(103, "Al-Asr", 601, 601),
    Surah::new(104, "Al-Humazah", 601, 601),
    Surah::new(105, "Al-Fil", 601, 601),
    Surah::new(106, "Quraysh", 602, 602),
    Surah::new(107, "Al-Ma'un", 602, 602),
    Surah::new(108, "Al-Kawthar", 602, 602),
    Surah::new(109, "Al-Kafirun", 603, 603),
    Surah::new(110, "An-Nasr", 603, 603),
    Surah::new(111, "Al-Masad", 603, 603),
    Surah::new(112, "Al-Ikhlas", 604, 604),
    Surah::new(113, "Al-Falaq", 604, 604),
    Surah::new(114, "An-Nas", 604, 604),
];

/// The first surah that appears on a page.
pub fn surah_of_page(id: PageId) -> Option<&'static Surah> {
    let n = id.number();
    SURAHS
        .iter()
        .find(|s| s.start_page <= n && n <= s.end_page)
}

/// The number of memorized pages within a surah.
pub fn memorized_count(surah: &Surah, pages: &MemorizedSet) -> u32 {
    surah.pages().filter(|&id| pages.contains(id)).count() as u32
}

#[derive(Clone, Copy, PartialEq, Eq, Default, Debug, Serialize)]
pub struct TierCounts {
    pub bronze: u32,
    pub silver: u32,
    pub gold: u32,
}

/// Progress through one surah.
#[derive(Clone, PartialEq, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SurahProgress {
    #[serde(flatten)]
    pub surah: Surah,
    pub memorized_count: u32,
    pub total_pages: u32,
    pub percentage: u32,
    pub tiers: TierCounts,
}

/// Progress through every surah with at least one memorized page, in surah
/// order.
pub fn overview(pages: &MemorizedSet) -> Vec<SurahProgress> {
    let mut result = Vec::new();
    for surah in SURAHS.iter() {
        let count = memorized_count(surah, pages);
        if count == 0 {
            continue;
        }
        let mut tiers = TierCounts::default();
        for id in surah.pages() {
            match pages.tier(id) {
                Some(Tier::Bronze) => tiers.bronze += 1,
                Some(Tier::Silver) => tiers.silver += 1,
                Some(Tier::Gold) => tiers.gold += 1,
                None => {}
            }
        }
        let total_pages = surah.total_pages();
        result.push(SurahProgress {
            surah: *surah,
            memorized_count: count,
            total_pages,
            percentage: percentage(count as usize, total_pages as usize),
            tiers,
        });
    }
    result
}
