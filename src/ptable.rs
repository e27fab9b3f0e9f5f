//! Periodic table reference data: symbol, atomic number, display color.

use std::collections::HashMap;

use lazy_static::lazy_static;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ElementData {
    pub symbol: &'static str,
    pub atomic_number: usize,
    pub color: &'static str,
}

const fn el(symbol: &'static str, atomic_number: usize, color: &'static str) -> ElementData {
    ElementData {
        symbol,
        atomic_number,
        color,
    }
}

/// Elements 1-118, indexed by atomic number minus one. Colors are Graphviz
/// color names used by the DOT exporter.
pub static ELEMENTS: [ElementData; 118] = [
    el("H", 1, "gray"),
    el("He", 2, "cyan"),
    el("Li", 3, "violet"),
    el("Be", 4, "green"),
    el("B", 5, "salmon"),
    el("C", 6, "black"),
    el("N", 7, "blue"),
    el("O", 8, "red"),
    el("F", 9, "pink"),
    el("Ne", 10, "cyan"),
    el("Na", 11, "violet"),
    el("Mg", 12, "green"),
    el("Al", 13, "lightgray"),
    el("Si", 14, "goldenrod"),
    el("P", 15, "orange"),
    el("S", 16, "yellow"),
    el("Cl", 17, "darkgreen"),
    el("Ar", 18, "cyan"),
    el("K", 19, "violet"),
    el("Ca", 20, "green"),
    el("Sc", 21, "lightgray"),
    el("Ti", 22, "lightgray"),
    el("V", 23, "lightgray"),
    el("Cr", 24, "lightgray"),
    el("Mn", 25, "lightgray"),
    el("Fe", 26, "orange"),
    el("Co", 27, "lightgray"),
    el("Ni", 28, "lightgray"),
    el("Cu", 29, "brown"),
    el("Zn", 30, "lightgray"),
    el("Ga", 31, "lightgray"),
    el("Ge", 32, "lightgray"),
    el("As", 33, "violet"),
    el("Se", 34, "orange"),
    el("Br", 35, "brown"),
    el("Kr", 36, "cyan"),
    el("Rb", 37, "violet"),
    el("Sr", 38, "green"),
    el("Y", 39, "lightgray"),
    el("Zr", 40, "lightgray"),
    el("Nb", 41, "lightgray"),
    el("Mo", 42, "lightgray"),
    el("Tc", 43, "lightgray"),
    el("Ru", 44, "lightgray"),
    el("Rh", 45, "lightgray"),
    el("Pd", 46, "lightgray"),
    el("Ag", 47, "lightgray"),
    el("Cd", 48, "lightgray"),
    el("In", 49, "lightgray"),
    el("Sn", 50, "lightgray"),
    el("Sb", 51, "violet"),
    el("Te", 52, "orange"),
    el("I", 53, "purple"),
    el("Xe", 54, "cyan"),
    el("Cs", 55, "violet"),
    el("Ba", 56, "green"),
    el("La", 57, "lightgray"),
    el("Ce", 58, "lightgray"),
    el("Pr", 59, "lightgray"),
    el("Nd", 60, "lightgray"),
    el("Pm", 61, "lightgray"),
    el("Sm", 62, "lightgray"),
    el("Eu", 63, "lightgray"),
    el("Gd", 64, "lightgray"),
    el("Tb", 65, "lightgray"),
    el("Dy", 66, "lightgray"),
    el("Ho", 67, "lightgray"),
    el("Er", 68, "lightgray"),
    el("Tm", 69, "lightgray"),
    el("Yb", 70, "lightgray"),
    el("Lu", 71, "lightgray"),
    el("Hf", 72, "lightgray"),
    el("Ta", 73, "lightgray"),
    el("W", 74, "lightgray"),
    el("Re", 75, "lightgray"),
    el("Os", 76, "lightgray"),
    el("Ir", 77, "lightgray"),
    el("Pt", 78, "lightgray"),
    el("Au", 79, "goldenrod"),
    el("Hg", 80, "lightgray"),
    el("Tl", 81, "lightgray"),
    el("Pb", 82, "lightgray"),
    el("Bi", 83, "violet"),
    el("Po", 84, "orange"),
    el("At", 85, "brown"),
    el("Rn", 86, "cyan"),
    el("Fr", 87, "violet"),
    el("Ra", 88, "green"),
    el("Ac", 89, "lightgray"),
    el("Th", 90, "lightgray"),
    el("Pa", 91, "lightgray"),
    el("U", 92, "lightgray"),
    el("Np", 93, "lightgray"),
    el("Pu", 94, "lightgray"),
    el("Am", 95, "lightgray"),
    el("Cm", 96, "lightgray"),
    el("Bk", 97, "lightgray"),
    el("Cf", 98, "lightgray"),
    el("Es", 99, "lightgray"),
    el("Fm", 100, "lightgray"),
    el("Md", 101, "lightgray"),
    el("No", 102, "lightgray"),
    el("Lr", 103, "lightgray"),
    el("Rf", 104, "lightgray"),
    el("Db", 105, "lightgray"),
    el("Sg", 106, "lightgray"),
    el("Bh", 107, "lightgray"),
    el("Hs", 108, "lightgray"),
    el("Mt", 109, "lightgray"),
    el("Ds", 110, "lightgray"),
    el("Rg", 111, "lightgray"),
    el("Cn", 112, "lightgray"),
    el("Nh", 113, "lightgray"),
    el("Fl", 114, "lightgray"),
    el("Mc", 115, "lightgray"),
    el("Lv", 116, "lightgray"),
    el("Ts", 117, "lightgray"),
    el("Og", 118, "lightgray"),
];

lazy_static! {
    static ref BY_SYMBOL: HashMap<&'static str, &'static ElementData> =
        ELEMENTS.iter().map(|e| (e.symbol, e)).collect();
}

/// Looks up an element by its symbol.
pub fn element(symbol: &str) -> Option<&'static ElementData> {
    BY_SYMBOL.get(symbol).copied()
}

/// Looks up the atomic number for a symbol.
pub fn atomic_number(symbol: &str) -> Option<usize> {
    element(symbol).map(|e| e.atomic_number)
}

/// Display color for a symbol, falling back to a neutral color for symbols
/// without a dedicated entry.
pub fn element_color(symbol: &str) -> &'static str {
    element(symbol).map(|e| e.color).unwrap_or("lightgray")
}
