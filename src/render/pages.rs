//! Static content shown on the home and about pages.

pub const APP_NAME: &str = "ResepPintar";

pub const HOME_INTRO: &str = "Selamat datang di ResepPintar! Aplikasi ini dirancang untuk membantu Anda \
menemukan ide masakan berdasarkan bahan-bahan yang Anda miliki. Mari bergabung dalam petualangan \
memahami dan memanfaatkan bahan di dapur dengan cara yang inovatif dan berkelanjutan.";

pub const HOME_FACTS_TITLE: &str = "Tahukah Kamu?";

pub const HOME_FACTS_INTRO: &str =
    "Aplikasi ini bertujuan membantu mengurangi limbah makanan (food waste) di Indonesia.";

pub const SEARCH_TITLE: &str = "Pencarian Resep";

pub const SEARCH_HINT: &str = "Masukkan bahan-bahan yang Anda miliki (pisahkan dengan koma), \
dan kami akan carikan resep yang cocok! Contoh: daging sapi, bawang putih, kecap";

pub const ABOUT_TITLE: &str = "Tentang ResepPintar";

pub const ABOUT_BODY: [&str; 2] = [
    "ResepPintar adalah katalog resep yang dirancang untuk membantu pengguna menemukan ide \
     masakan berdasarkan bahan-bahan yang mereka miliki.",
    "Aplikasi ini dibuat untuk mengatasi kebingungan memasak harian dan membantu mengurangi \
     limbah makanan (food waste).",
];

pub const TECH_TITLE: &str = "Teknologi yang Digunakan";

/// (label, value) pairs listed under the technology heading
pub const TECH_STACK: [(&str, &str); 3] = [
    ("Antarmuka", "Baris perintah & HTML"),
    ("API Resep", "Spoonacular"),
    ("Penerjemah", "DeepL / Google Translate"),
];

/// Colour theme of a metric box
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Grey,
    Yellow,
    Blue,
    Green,
    Red,
}

impl Tone {
    pub fn css_class(&self) -> &'static str {
        match self {
            Tone::Grey => "grey",
            Tone::Yellow => "yellow",
            Tone::Blue => "blue",
            Tone::Green => "green",
            Tone::Red => "red",
        }
    }
}

/// One highlighted statistic on the home page
#[derive(Debug, Clone, Copy)]
pub struct Metric {
    pub label: &'static str,
    pub value: &'static str,
    pub caption: &'static str,
    pub tone: Tone,
}

pub const HOME_METRICS: [Metric; 5] = [
    Metric {
        label: "Limbah Makanan",
        value: "184 kg",
        caption: "per kapita / tahun",
        tone: Tone::Grey,
    },
    Metric {
        label: "Bahan Sering Terbuang",
        value: "Sayuran",
        caption: "& Makanan Sisa",
        tone: Tone::Yellow,
    },
    Metric {
        label: "Potensi Penghematan",
        value: "~Rp 5 Juta",
        caption: "per keluarga / tahun",
        tone: Tone::Blue,
    },
    Metric {
        label: "Resep Tersedia",
        value: "500.000+",
        caption: "dari seluruh dunia",
        tone: Tone::Green,
    },
    Metric {
        label: "Tantangan Memasak",
        value: "65%",
        caption: "orang bingung masak apa",
        tone: Tone::Red,
    },
];
