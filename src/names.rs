//! Month names for each Kurdish dialect, in Solar Hijri month order.
//!
//! Names use the Arabic-script orthography with a zero-width non-joiner
//! (U+200C) after a non-final heh.

use crate::kurdish::Dialect;

const LAKI: [&str; 12] = [
    "په\u{200c}نجه",
    "گوڵاڵه",
    "بانه\u{200c}مه\u{200c}ڕ",
    "هه\u{200c}ره\u{200c}زه",
    "گه\u{200c}لاوێژ",
    "خه\u{200c}رمانان",
    "ڕه\u{200c}زبه\u{200c}ر",
    "گه\u{200c}ڵاڕێزان",
    "سه\u{200c}رماوه\u{200c}ز",
    "به\u{200c}فرانبار",
    "ڕێبه\u{200c}ندان",
    "ڕه\u{200c}شه\u{200c}مه",
];

const HAWRAMI: [&str; 12] = [
    "نه\u{200c}ورۆز",
    "پاژه\u{200c}ره\u{200c}ژان",
    "که\u{200c}ڕچ",
    "گه\u{200c}رماجان",
    "گه\u{200c}لاوێژ",
    "ده\u{200c}ره\u{200c}وێنان",
    "ڕه\u{200c}زبه\u{200c}ر",
    "گه\u{200c}ڵاڕێزان",
    "که\u{200c}وه\u{200c}ڵه\u{200c}وه\u{200c}ر",
    "به\u{200c}فرانبار",
    "ڕێبه\u{200c}ندان",
    "ڕه\u{200c}شه\u{200c}مه",
];

const SORANI: [&str; 12] = [
    "خاکه\u{200c}لێوه",
    "گوڵان",
    "جۆزه\u{200c}ردان",
    "پووشپه\u{200c}ڕ",
    "گه\u{200c}لاوێژ",
    "خه\u{200c}رمانان",
    "ڕه\u{200c}زبه\u{200c}ر",
    "خه\u{200c}زه\u{200c}ڵوه\u{200c}ر",
    "سه\u{200c}رماوه\u{200c}ز",
    "به\u{200c}فرانبار",
    "ڕێبه\u{200c}ندان",
    "ڕه\u{200c}شه\u{200c}مه",
];

const KALHURI: [&str; 12] = [
    "جه\u{200c}ژنان (جه\u{200c}شنان)",
    "گوڵان",
    "زه\u{200c}ردان",
    "په\u{200c}رپه\u{200c}ر",
    "گه\u{200c}لاوێژ",
    "نوخشان",
    "به\u{200c}ران",
    "خه\u{200c}زان",
    "ساران",
    "به\u{200c}فران",
    "به\u{200c}ندان",
    "ڕه\u{200c}شه\u{200c}مه",
];

const KURMANJI: [&str; 12] = [
    "نیسان",
    "گولان",
    "حه\u{200c}زیران",
    "تیرمه\u{200c}ه",
    "ته\u{200c}باخ",
    "ئیلون",
    "چریا پێشین",
    "چریا پاشین",
    "کانوونا پێشین",
    "کانوونا پاشین",
    "شوبات",
    "ئادار",
];

/// The twelve month names of `dialect`.
pub(crate) const fn month_names(dialect: Dialect) -> &'static [&'static str; 12] {
    match dialect {
        Dialect::Laki => &LAKI,
        Dialect::Hawrami => &HAWRAMI,
        Dialect::Sorani => &SORANI,
        Dialect::Kalhuri => &KALHURI,
        Dialect::Kurmanji => &KURMANJI,
    }
}
