//! Named color palette

use crate::properties::Color;

/// A palette color: class suffix plus its RGB value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaletteColor {
    pub name: &'static str,
    pub color: Color,
}

const fn c(name: &'static str, hex: u32) -> PaletteColor {
    PaletteColor {
        name,
        color: Color::rgb((hex >> 16) as u8, (hex >> 8) as u8, hex as u8),
    }
}

/// Full palette, black and white first. Ties resolve to the earlier entry.
pub const PALETTE: &[PaletteColor] = &[
    c("black", 0x000000),
    c("white", 0xffffff),
    c("slate-50", 0xf8fafc),
    c("slate-100", 0xf1f5f9),
    c("slate-200", 0xe2e8f0),
    c("slate-300", 0xcbd5e1),
    c("slate-400", 0x94a3b8),
    c("slate-500", 0x64748b),
    c("slate-600", 0x475569),
    c("slate-700", 0x334155),
    c("slate-800", 0x1e293b),
    c("slate-900", 0x0f172a),
    c("slate-950", 0x020617),
    c("gray-50", 0xf9fafb),
    c("gray-100", 0xf3f4f6),
    c("gray-200", 0xe5e7eb),
    c("gray-300", 0xd1d5db),
    c("gray-400", 0x9ca3af),
    c("gray-500", 0x6b7280),
    c("gray-600", 0x4b5563),
    c("gray-700", 0x374151),
    c("gray-800", 0x1f2937),
    c("gray-900", 0x111827),
    c("gray-950", 0x030712),
    c("zinc-50", 0xfafafa),
    c("zinc-100", 0xf4f4f5),
    c("zinc-200", 0xe4e4e7),
    c("zinc-300", 0xd4d4d8),
    c("zinc-400", 0xa1a1aa),
    c("zinc-500", 0x71717a),
    c("zinc-600", 0x52525b),
    c("zinc-700", 0x3f3f46),
    c("zinc-800", 0x27272a),
    c("zinc-900", 0x18181b),
    c("zinc-950", 0x09090b),
    c("neutral-50", 0xfafafa),
    c("neutral-100", 0xf5f5f5),
    c("neutral-200", 0xe5e5e5),
    c("neutral-300", 0xd4d4d4),
    c("neutral-400", 0xa3a3a3),
    c("neutral-500", 0x737373),
    c("neutral-600", 0x525252),
    c("neutral-700", 0x404040),
    c("neutral-800", 0x262626),
    c("neutral-900", 0x171717),
    c("neutral-950", 0x0a0a0a),
    c("stone-50", 0xfafaf9),
    c("stone-100", 0xf5f5f4),
    c("stone-200", 0xe7e5e4),
    c("stone-300", 0xd6d3d1),
    c("stone-400", 0xa8a29e),
    c("stone-500", 0x78716c),
    c("stone-600", 0x57534e),
    c("stone-700", 0x44403c),
    c("stone-800", 0x292524),
    c("stone-900", 0x1c1917),
    c("stone-950", 0x0c0a09),
    c("red-50", 0xfef2f2),
    c("red-100", 0xfee2e2),
    c("red-200", 0xfecaca),
    c("red-300", 0xfca5a5),
    c("red-400", 0xf87171),
    c("red-500", 0xef4444),
    c("red-600", 0xdc2626),
    c("red-700", 0xb91c1c),
    c("red-800", 0x991b1b),
    c("red-900", 0x7f1d1d),
    c("red-950", 0x450a0a),
    c("orange-50", 0xfff7ed),
    c("orange-100", 0xffedd5),
    c("orange-200", 0xfed7aa),
    c("orange-300", 0xfdba74),
    c("orange-400", 0xfb923c),
    c("orange-500", 0xf97316),
    c("orange-600", 0xea580c),
    c("orange-700", 0xc2410c),
    c("orange-800", 0x9a3412),
    c("orange-900", 0x7c2d12),
    c("orange-950", 0x431407),
    c("amber-50", 0xfffbeb),
    c("amber-100", 0xfef3c7),
    c("amber-200", 0xfde68a),
    c("amber-300", 0xfcd34d),
    c("amber-400", 0xfbbf24),
    c("amber-500", 0xf59e0b),
    c("amber-600", 0xd97706),
    c("amber-700", 0xb45309),
    c("amber-800", 0x92400e),
    c("amber-900", 0x78350f),
    c("amber-950", 0x451a03),
    c("yellow-50", 0xfefce8),
    c("yellow-100", 0xfef9c3),
    c("yellow-200", 0xfef08a),
    c("yellow-300", 0xfde047),
    c("yellow-400", 0xfacc15),
    c("yellow-500", 0xeab308),
    c("yellow-600", 0xca8a04),
    c("yellow-700", 0xa16207),
    c("yellow-800", 0x854d0e),
    c("yellow-900", 0x713f12),
    c("yellow-950", 0x422006),
    c("lime-50", 0xf7fee7),
    c("lime-100", 0xecfccb),
    c("lime-200", 0xd9f99d),
    c("lime-300", 0xbef264),
    c("lime-400", 0xa3e635),
    c("lime-500", 0x84cc16),
    c("lime-600", 0x65a30d),
    c("lime-700", 0x4d7c0f),
    c("lime-800", 0x3f6212),
    c("lime-900", 0x365314),
    c("lime-950", 0x1a2e05),
    c("green-50", 0xf0fdf4),
    c("green-100", 0xdcfce7),
    c("green-200", 0xbbf7d0),
    c("green-300", 0x86efac),
    c("green-400", 0x4ade80),
    c("green-500", 0x22c55e),
    c("green-600", 0x16a34a),
    c("green-700", 0x15803d),
    c("green-800", 0x166534),
    c("green-900", 0x14532d),
    c("green-950", 0x052e16),
    c("emerald-50", 0xecfdf5),
    c("emerald-100", 0xd1fae5),
    c("emerald-200", 0xa7f3d0),
    c("emerald-300", 0x6ee7b7),
    c("emerald-400", 0x34d399),
    c("emerald-500", 0x10b981),
    c("emerald-600", 0x059669),
    c("emerald-700", 0x047857),
    c("emerald-800", 0x065f46),
    c("emerald-900", 0x064e3b),
    c("emerald-950", 0x022c22),
    c("teal-50", 0xf0fdfa),
    c("teal-100", 0xccfbf1),
    c("teal-200", 0x99f6e4),
    c("teal-300", 0x5eead4),
    c("teal-400", 0x2dd4bf),
    c("teal-500", 0x14b8a6),
    c("teal-600", 0x0d9488),
    c("teal-700", 0x0f766e),
    c("teal-800", 0x115e59),
    c("teal-900", 0x134e4a),
    c("teal-950", 0x042f2e),
    c("cyan-50", 0xecfeff),
    c("cyan-100", 0xcffafe),
    c("cyan-200", 0xa5f3fc),
    c("cyan-300", 0x67e8f9),
    c("cyan-400", 0x22d3ee),
    c("cyan-500", 0x06b6d4),
    c("cyan-600", 0x0891b2),
    c("cyan-700", 0x0e7490),
    c("cyan-800", 0x155e75),
    c("cyan-900", 0x164e63),
    c("cyan-950", 0x083344),
    c("sky-50", 0xf0f9ff),
    c("sky-100", 0xe0f2fe),
    c("sky-200", 0xbae6fd),
    c("sky-300", 0x7dd3fc),
    c("sky-400", 0x38bdf8),
    c("sky-500", 0x0ea5e9),
    c("sky-600", 0x0284c7),
    c("sky-700", 0x0369a1),
    c("sky-800", 0x075985),
    c("sky-900", 0x0c4a6e),
    c("sky-950", 0x082f49),
    c("blue-50", 0xeff6ff),
    c("blue-100", 0xdbeafe),
    c("blue-200", 0xbfdbfe),
    c("blue-300", 0x93c5fd),
    c("blue-400", 0x60a5fa),
    c("blue-500", 0x3b82f6),
    c("blue-600", 0x2563eb),
    c("blue-700", 0x1d4ed8),
    c("blue-800", 0x1e40af),
    c("blue-900", 0x1e3a8a),
    c("blue-950", 0x172554),
    c("indigo-50", 0xeef2ff),
    c("indigo-100", 0xe0e7ff),
    c("indigo-200", 0xc7d2fe),
    c("indigo-300", 0xa5b4fc),
    c("indigo-400", 0x818cf8),
    c("indigo-500", 0x6366f1),
    c("indigo-600", 0x4f46e5),
    c("indigo-700", 0x4338ca),
    c("indigo-800", 0x3730a3),
    c("indigo-900", 0x312e81),
    c("indigo-950", 0x1e1b4b),
    c("violet-50", 0xf5f3ff),
    c("violet-100", 0xede9fe),
    c("violet-200", 0xddd6fe),
    c("violet-300", 0xc4b5fd),
    c("violet-400", 0xa78bfa),
    c("violet-500", 0x8b5cf6),
    c("violet-600", 0x7c3aed),
    c("violet-700", 0x6d28d9),
    c("violet-800", 0x5b21b6),
    c("violet-900", 0x4c1d95),
    c("violet-950", 0x2e1065),
    c("purple-50", 0xfaf5ff),
    c("purple-100", 0xf3e8ff),
    c("purple-200", 0xe9d5ff),
    c("purple-300", 0xd8b4fe),
    c("purple-400", 0xc084fc),
    c("purple-500", 0xa855f7),
    c("purple-600", 0x9333ea),
    c("purple-700", 0x7e22ce),
    c("purple-800", 0x6b21a8),
    c("purple-900", 0x581c87),
    c("purple-950", 0x3b0764),
    c("fuchsia-50", 0xfdf4ff),
    c("fuchsia-100", 0xfae8ff),
    c("fuchsia-200", 0xf5d0fe),
    c("fuchsia-300", 0xf0abfc),
    c("fuchsia-400", 0xe879f9),
    c("fuchsia-500", 0xd946ef),
    c("fuchsia-600", 0xc026d3),
    c("fuchsia-700", 0xa21caf),
    c("fuchsia-800", 0x86198f),
    c("fuchsia-900", 0x701a75),
    c("fuchsia-950", 0x4a044e),
    c("pink-50", 0xfdf2f8),
    c("pink-100", 0xfce7f3),
    c("pink-200", 0xfbcfe8),
    c("pink-300", 0xf9a8d4),
    c("pink-400", 0xf472b6),
    c("pink-500", 0xec4899),
    c("pink-600", 0xdb2777),
    c("pink-700", 0xbe185d),
    c("pink-800", 0x9d174d),
    c("pink-900", 0x831843),
    c("pink-950", 0x500724),
    c("rose-50", 0xfff1f2),
    c("rose-100", 0xffe4e6),
    c("rose-200", 0xfecdd3),
    c("rose-300", 0xfda4af),
    c("rose-400", 0xfb7185),
    c("rose-500", 0xf43f5e),
    c("rose-600", 0xe11d48),
    c("rose-700", 0xbe123c),
    c("rose-800", 0x9f1239),
    c("rose-900", 0x881337),
    c("rose-950", 0x4c0519),
];

/// Nearest palette color by Manhattan RGB distance
pub fn nearest_color(color: &Color) -> (&'static PaletteColor, u32) {
    let mut best = (&PALETTE[0], color.manhattan(&PALETTE[0].color));
    for entry in &PALETTE[1..] {
        let distance = color.manhattan(&entry.color);
        if distance < best.1 {
            best = (entry, distance);
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_match() {
        let (entry, d) = nearest_color(&Color::rgb(0x3b, 0x82, 0xf6));
        assert_eq!(entry.name, "blue-500");
        assert_eq!(d, 0);
    }

    #[test]
    fn test_near_white() {
        let (entry, d) = nearest_color(&Color::rgb(254, 254, 254));
        assert_eq!(entry.name, "white");
        assert_eq!(d, 3);
    }

    #[test]
    fn test_duplicate_values_resolve_to_first() {
        // zinc-50 and neutral-50 share #fafafa
        let (entry, _) = nearest_color(&Color::rgb(0xfa, 0xfa, 0xfa));
        assert_eq!(entry.name, "zinc-50");
    }
}
