//! Element symbols, atomic numbers, and the metal-like predicate used to pick
//! octahedron centers.

/// Symbols for Z = 1..=118, index `Z - 1`.
const SYMBOLS: [&str; 118] = [
    "H", "He", "Li", "Be", "B", "C", "N", "O", "F", "Ne", "Na", "Mg", "Al", "Si", "P", "S", "Cl",
    "Ar", "K", "Ca", "Sc", "Ti", "V", "Cr", "Mn", "Fe", "Co", "Ni", "Cu", "Zn", "Ga", "Ge", "As",
    "Se", "Br", "Kr", "Rb", "Sr", "Y", "Zr", "Nb", "Mo", "Tc", "Ru", "Rh", "Pd", "Ag", "Cd", "In",
    "Sn", "Sb", "Te", "I", "Xe", "Cs", "Ba", "La", "Ce", "Pr", "Nd", "Pm", "Sm", "Eu", "Gd", "Tb",
    "Dy", "Ho", "Er", "Tm", "Yb", "Lu", "Hf", "Ta", "W", "Re", "Os", "Ir", "Pt", "Au", "Hg", "Tl",
    "Pb", "Bi", "Po", "At", "Rn", "Fr", "Ra", "Ac", "Th", "Pa", "U", "Np", "Pu", "Am", "Cm", "Bk",
    "Cf", "Es", "Fm", "Md", "No", "Lr", "Rf", "Db", "Sg", "Bh", "Hs", "Mt", "Ds", "Rg", "Cn", "Nh",
    "Fl", "Mc", "Lv", "Ts", "Og",
];

/// Atomic-number bands treated as metal-like: 3d, 4d, La–Hg, Ac–Cn.
const METAL_BANDS: [(u32, u32); 4] = [(21, 30), (39, 48), (57, 80), (89, 112)];

/// Symbol for atomic number `z`.
pub fn symbol(z: u32) -> Option<&'static str> {
    let idx = usize::try_from(z).ok()?.checked_sub(1)?;
    SYMBOLS.get(idx).copied()
}

/// Atomic number of an atom label.
///
/// Labels are matched on their leading letters, so `Fe`, `FE`, `fe` and `Fe1`
/// all give 26. The two-letter reading goes first when the second letter is
/// lowercase or the label has no site suffix (`Co` is cobalt, `C1` is carbon).
/// An uppercase pair followed by a suffix reads as one letter when that is an
/// element: `HO1` is a hydroxyl hydrogen, `RU2` is still ruthenium.
pub fn atomic_number(label: &str) -> Option<u32> {
    let label = label.trim();
    let letters: String = label
        .chars()
        .take_while(|c| c.is_ascii_alphabetic())
        .take(2)
        .collect();
    let mut candidates = Vec::with_capacity(2);
    if letters.len() == 2 {
        let pair = normalize(&letters);
        let single = normalize(&letters[..1]);
        let second_lower = letters.chars().nth(1).is_some_and(|c| c.is_ascii_lowercase());
        if second_lower || label.len() == 2 {
            candidates.push(pair);
            candidates.push(single);
        } else {
            candidates.push(single);
            candidates.push(pair);
        }
    } else if !letters.is_empty() {
        candidates.push(normalize(&letters));
    }
    candidates.iter().find_map(|c| {
        SYMBOLS
            .iter()
            .position(|s| *s == c.as_str())
            .and_then(|i| u32::try_from(i + 1).ok())
    })
}

/// Canonical symbol for a label (`FE` → `Fe`).
pub fn canonical_symbol(label: &str) -> Option<&'static str> {
    atomic_number(label).and_then(symbol)
}

/// True for transition metals, lanthanides and actinides.
pub fn is_metal(label: &str) -> bool {
    atomic_number(label).is_some_and(is_metal_z)
}

#[inline]
pub fn is_metal_z(z: u32) -> bool {
    METAL_BANDS.iter().any(|&(lo, hi)| (lo..=hi).contains(&z))
}

fn normalize(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for (i, c) in s.chars().enumerate() {
        if i == 0 {
            out.push(c.to_ascii_uppercase());
        } else {
            out.push(c.to_ascii_lowercase());
        }
    }
    out
}
