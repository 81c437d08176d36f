//! East Asian Ambiguous ranges
//!
//! Generated from the Unicode Character Database 14.0.0
//! (`EastAsianWidth.txt`, property value `A`). Sorted, non-overlapping,
//! inclusive.

pub(crate) const AMBIGUOUS: &[(char, char)] = &[
    ('\u{00A1}', '\u{00A1}'),
    ('\u{00A4}', '\u{00A4}'),
    ('\u{00A7}', '\u{00A8}'),
    ('\u{00AA}', '\u{00AA}'),
    ('\u{00AD}', '\u{00AE}'),
    ('\u{00B0}', '\u{00B4}'),
    ('\u{00B6}', '\u{00BA}'),
    ('\u{00BC}', '\u{00BF}'),
    ('\u{00C6}', '\u{00C6}'),
    ('\u{00D0}', '\u{00D0}'),
    ('\u{00D7}', '\u{00D8}'),
    ('\u{00DE}', '\u{00E1}'),
    ('\u{00E6}', '\u{00E6}'),
    ('\u{00E8}', '\u{00EA}'),
    ('\u{00EC}', '\u{00ED}'),
    ('\u{00F0}', '\u{00F0}'),
    ('\u{00F2}', '\u{00F3}'),
    ('\u{00F7}', '\u{00FA}'),
    ('\u{00FC}', '\u{00FC}'),
    ('\u{00FE}', '\u{00FE}'),
    ('\u{0101}', '\u{0101}'),
    ('\u{0111}', '\u{0111}'),
    ('\u{0113}', '\u{0113}'),
    ('\u{011B}', '\u{011B}'),
    ('\u{0126}', '\u{0127}'),
    ('\u{012B}', '\u{012B}'),
    ('\u{0131}', '\u{0133}'),
    ('\u{0138}', '\u{0138}'),
    ('\u{013F}', '\u{0142}'),
    ('\u{0144}', '\u{0144}'),
    ('\u{0148}', '\u{014B}'),
    ('\u{014D}', '\u{014D}'),
    ('\u{0152}', '\u{0153}'),
    ('\u{0166}', '\u{0167}'),
    ('\u{016B}', '\u{016B}'),
    ('\u{01CE}', '\u{01CE}'),
    ('\u{01D0}', '\u{01D0}'),
    ('\u{01D2}', '\u{01D2}'),
    ('\u{01D4}', '\u{01D4}'),
    ('\u{01D6}', '\u{01D6}'),
    ('\u{01D8}', '\u{01D8}'),
    ('\u{01DA}', '\u{01DA}'),
    ('\u{01DC}', '\u{01DC}'),
    ('\u{0251}', '\u{0251}'),
    ('\u{0261}', '\u{0261}'),
    ('\u{02C4}', '\u{02C4}'),
    ('\u{02C7}', '\u{02C7}'),
    ('\u{02C9}', '\u{02CB}'),
    ('\u{02CD}', '\u{02CD}'),
    ('\u{02D0}', '\u{02D0}'),
    ('\u{02D8}', '\u{02DB}'),
    ('\u{02DD}', '\u{02DD}'),
    ('\u{02DF}', '\u{02DF}'),
    ('\u{0300}', '\u{036F}'),
    ('\u{0391}', '\u{03A1}'),
    ('\u{03A3}', '\u{03A9}'),
    ('\u{03B1}', '\u{03C1}'),
    ('\u{03C3}', '\u{03C9}'),
    ('\u{0401}', '\u{0401}'),
    ('\u{0410}', '\u{044F}'),
    ('\u{0451}', '\u{0451}'),
    ('\u{2010}', '\u{2010}'),
    ('\u{2013}', '\u{2016}'),
    ('\u{2018}', '\u{2019}'),
    ('\u{201C}', '\u{201D}'),
    ('\u{2020}', '\u{2022}'),
    ('\u{2024}', '\u{2027}'),
    ('\u{2030}', '\u{2030}'),
    ('\u{2032}', '\u{2033}'),
    ('\u{2035}', '\u{2035}'),
    ('\u{203B}', '\u{203B}'),
    ('\u{203E}', '\u{203E}'),
    ('\u{2074}', '\u{2074}'),
    ('\u{207F}', '\u{207F}'),
    ('\u{2081}', '\u{2084}'),
    ('\u{20AC}', '\u{20AC}'),
    ('\u{2103}', '\u{2103}'),
    ('\u{2105}', '\u{2105}'),
    ('\u{2109}', '\u{2109}'),
    ('\u{2113}', '\u{2113}'),
    ('\u{2116}', '\u{2116}'),
    ('\u{2121}', '\u{2122}'),
    ('\u{2126}', '\u{2126}'),
    ('\u{212B}', '\u{212B}'),
    ('\u{2153}', '\u{2154}'),
    ('\u{215B}', '\u{215E}'),
    ('\u{2160}', '\u{216B}'),
    ('\u{2170}', '\u{2179}'),
    ('\u{2189}', '\u{2189}'),
    ('\u{2190}', '\u{2199}'),
    ('\u{21B8}', '\u{21B9}'),
    ('\u{21D2}', '\u{21D2}'),
    ('\u{21D4}', '\u{21D4}'),
    ('\u{21E7}', '\u{21E7}'),
    ('\u{2200}', '\u{2200}'),
    ('\u{2202}', '\u{2203}'),
    ('\u{2207}', '\u{2208}'),
    ('\u{220B}', '\u{220B}'),
    ('\u{220F}', '\u{220F}'),
    ('\u{2211}', '\u{2211}'),
    ('\u{2215}', '\u{2215}'),
    ('\u{221A}', '\u{221A}'),
    ('\u{221D}', '\u{2220}'),
    ('\u{2223}', '\u{2223}'),
    ('\u{2225}', '\u{2225}'),
    ('\u{2227}', '\u{222C}'),
    ('\u{222E}', '\u{222E}'),
    ('\u{2234}', '\u{2237}'),
    ('\u{223C}', '\u{223D}'),
    ('\u{2248}', '\u{2248}'),
    ('\u{224C}', '\u{224C}'),
    ('\u{2252}', '\u{2252}'),
    ('\u{2260}', '\u{2261}'),
    ('\u{2264}', '\u{2267}'),
    ('\u{226A}', '\u{226B}'),
    ('\u{226E}', '\u{226F}'),
    ('\u{2282}', '\u{2283}'),
    ('\u{2286}', '\u{2287}'),
    ('\u{2295}', '\u{2295}'),
    ('\u{2299}', '\u{2299}'),
    ('\u{22A5}', '\u{22A5}'),
    ('\u{22BF}', '\u{22BF}'),
    ('\u{2312}', '\u{2312}'),
    ('\u{2460}', '\u{24E9}'),
    ('\u{24EB}', '\u{254B}'),
    ('\u{2550}', '\u{2573}'),
    ('\u{2580}', '\u{258F}'),
    ('\u{2592}', '\u{2595}'),
    ('\u{25A0}', '\u{25A1}'),
    ('\u{25A3}', '\u{25A9}'),
    ('\u{25B2}', '\u{25B3}'),
    ('\u{25B6}', '\u{25B7}'),
    ('\u{25BC}', '\u{25BD}'),
    ('\u{25C0}', '\u{25C1}'),
    ('\u{25C6}', '\u{25C8}'),
    ('\u{25CB}', '\u{25CB}'),
    ('\u{25CE}', '\u{25D1}'),
    ('\u{25E2}', '\u{25E5}'),
    ('\u{25EF}', '\u{25EF}'),
    ('\u{2605}', '\u{2606}'),
    ('\u{2609}', '\u{2609}'),
    ('\u{260E}', '\u{260F}'),
    ('\u{261C}', '\u{261C}'),
    ('\u{261E}', '\u{261E}'),
    ('\u{2640}', '\u{2640}'),
    ('\u{2642}', '\u{2642}'),
    ('\u{2660}', '\u{2661}'),
    ('\u{2663}', '\u{2665}'),
    ('\u{2667}', '\u{266A}'),
    ('\u{266C}', '\u{266D}'),
    ('\u{266F}', '\u{266F}'),
    ('\u{269E}', '\u{269F}'),
    ('\u{26BF}', '\u{26BF}'),
    ('\u{26C6}', '\u{26CD}'),
    ('\u{26CF}', '\u{26D3}'),
    ('\u{26D5}', '\u{26E1}'),
    ('\u{26E3}', '\u{26E3}'),
    ('\u{26E8}', '\u{26E9}'),
    ('\u{26EB}', '\u{26F1}'),
    ('\u{26F4}', '\u{26F4}'),
    ('\u{26F6}', '\u{26F9}'),
    ('\u{26FB}', '\u{26FC}'),
    ('\u{26FE}', '\u{26FF}'),
    ('\u{273D}', '\u{273D}'),
    ('\u{2776}', '\u{277F}'),
    ('\u{2B56}', '\u{2B59}'),
    ('\u{3248}', '\u{324F}'),
    ('\u{E000}', '\u{F8FF}'),
    ('\u{FE00}', '\u{FE0F}'),
    ('\u{FFFD}', '\u{FFFD}'),
    ('\u{1F100}', '\u{1F10A}'),
    ('\u{1F110}', '\u{1F12D}'),
    ('\u{1F130}', '\u{1F169}'),
    ('\u{1F170}', '\u{1F18D}'),
    ('\u{1F18F}', '\u{1F190}'),
    ('\u{1F19B}', '\u{1F1AC}'),
    ('\u{E0100}', '\u{E01EF}'),
    ('\u{F0000}', '\u{FFFFD}'),
    ('\u{100000}', '\u{10FFFD}'),
];
