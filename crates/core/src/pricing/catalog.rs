//! The static pricing catalog and lookups over it.
//!
//! Unknown ids never fail: callers get `None` or fallback text.

use rust_decimal_macros::dec;
use taxdesk_shared::{Cad, Language, LocalizedText};

use crate::pricing::types::{FilingType, PricingCategory, PricingPreset};

static PRICING_PRESETS: &[PricingPreset] = &[
    PricingPreset {
        id: "individual-simple",
        name: LocalizedText::new(
            "Individual - Simple",
            "Individuel - Simple",
            "Individual - Simples",
        ),
        description: LocalizedText::new(
            "Employment income, RRSP and standard credits",
            "Revenu d'emploi, REER et crédits standards",
            "Renda de emprego, RRSP e créditos padrão",
        ),
        amount: Cad::new(dec!(80.00)),
        category: PricingCategory::Personal,
        filing_type: Some(FilingType::Individual),
    },
    PricingPreset {
        id: "individual-complex",
        name: LocalizedText::new(
            "Individual - Complex",
            "Individuel - Complexe",
            "Individual - Complexo",
        ),
        description: LocalizedText::new(
            "Investments, rental income, capital gains or foreign income",
            "Placements, revenus locatifs, gains en capital ou revenus étrangers",
            "Investimentos, renda de aluguel, ganhos de capital ou renda estrangeira",
        ),
        amount: Cad::new(dec!(150.00)),
        category: PricingCategory::Personal,
        filing_type: Some(FilingType::Individual),
    },
    PricingPreset {
        id: "couple-simple",
        name: LocalizedText::new("Couple - Simple", "Couple - Simple", "Casal - Simples"),
        description: LocalizedText::new(
            "Two returns with employment income and standard credits",
            "Deux déclarations avec revenus d'emploi et crédits standards",
            "Duas declarações com renda de emprego e créditos padrão",
        ),
        amount: Cad::new(dec!(140.00)),
        category: PricingCategory::Personal,
        filing_type: Some(FilingType::Couple),
    },
    PricingPreset {
        id: "couple-complex",
        name: LocalizedText::new("Couple - Complex", "Couple - Complexe", "Casal - Complexo"),
        description: LocalizedText::new(
            "Two returns with investments, rental or foreign income",
            "Deux déclarations avec placements, revenus locatifs ou étrangers",
            "Duas declarações com investimentos, aluguel ou renda estrangeira",
        ),
        amount: Cad::new(dec!(250.00)),
        category: PricingCategory::Personal,
        filing_type: Some(FilingType::Couple),
    },
    PricingPreset {
        id: "self-employed",
        name: LocalizedText::new("Self-Employed", "Travailleur autonome", "Autônomo"),
        description: LocalizedText::new(
            "Personal return with business or professional income (T2125)",
            "Déclaration personnelle avec revenus d'entreprise (T2125)",
            "Declaração pessoal com renda de negócio ou profissional (T2125)",
        ),
        amount: Cad::new(dec!(300.00)),
        category: PricingCategory::Personal,
        filing_type: None,
    },
    PricingPreset {
        id: "small-business",
        name: LocalizedText::new("Small Business", "Petite entreprise", "Pequena empresa"),
        description: LocalizedText::new(
            "Year-end statements and return for a sole proprietorship or partnership",
            "États de fin d'année et déclaration pour une entreprise individuelle ou société de personnes",
            "Demonstrações de fim de ano e declaração para empresa individual ou sociedade",
        ),
        amount: Cad::new(dec!(600.00)),
        category: PricingCategory::Business,
        filing_type: None,
    },
    PricingPreset {
        id: "corporate-basic",
        name: LocalizedText::new(
            "Corporate Return (T2)",
            "Déclaration de société (T2)",
            "Declaração corporativa (T2)",
        ),
        description: LocalizedText::new(
            "T2 corporate return for a small corporation",
            "Déclaration T2 pour une petite société",
            "Declaração T2 para uma pequena corporação",
        ),
        amount: Cad::new(dec!(1200.00)),
        category: PricingCategory::Business,
        filing_type: None,
    },
    PricingPreset {
        id: "bookkeeping-monthly",
        name: LocalizedText::new(
            "Monthly Bookkeeping",
            "Tenue de livres mensuelle",
            "Contabilidade mensal",
        ),
        description: LocalizedText::new(
            "Monthly reconciliation and categorized ledger",
            "Rapprochement mensuel et grand livre catégorisé",
            "Conciliação mensal e livro razão categorizado",
        ),
        amount: Cad::new(dec!(250.00)),
        category: PricingCategory::Business,
        filing_type: None,
    },
    PricingPreset {
        id: "gst-hst-return",
        name: LocalizedText::new(
            "GST/HST Return",
            "Déclaration de TPS/TVH",
            "Declaração de GST/HST",
        ),
        description: LocalizedText::new(
            "Preparation and filing of a GST/HST return",
            "Préparation et production d'une déclaration de TPS/TVH",
            "Preparação e envio de uma declaração de GST/HST",
        ),
        amount: Cad::new(dec!(150.00)),
        category: PricingCategory::Business,
        filing_type: None,
    },
    PricingPreset {
        id: "payroll-setup",
        name: LocalizedText::new(
            "Payroll Setup",
            "Configuration de la paie",
            "Configuração da folha de pagamento",
        ),
        description: LocalizedText::new(
            "CRA payroll account setup and first remittance",
            "Ouverture du compte de paie ARC et premier versement",
            "Abertura da conta de folha na CRA e primeira remessa",
        ),
        amount: Cad::new(dec!(200.00)),
        category: PricingCategory::Business,
        filing_type: None,
    },
    PricingPreset {
        id: "amended-return",
        name: LocalizedText::new(
            "Amended Return",
            "Déclaration modifiée",
            "Declaração retificada",
        ),
        description: LocalizedText::new(
            "Adjustment request for a previously assessed return",
            "Demande de redressement d'une déclaration déjà cotisée",
            "Pedido de ajuste de uma declaração já avaliada",
        ),
        amount: Cad::new(dec!(100.00)),
        category: PricingCategory::Addon,
        filing_type: None,
    },
    PricingPreset {
        id: "prior-year-filing",
        name: LocalizedText::new(
            "Prior Year Filing",
            "Déclaration d'une année antérieure",
            "Declaração de ano anterior",
        ),
        description: LocalizedText::new(
            "Each additional prior tax year",
            "Chaque année d'imposition antérieure supplémentaire",
            "Cada ano fiscal anterior adicional",
        ),
        amount: Cad::new(dec!(90.00)),
        category: PricingCategory::Addon,
        filing_type: None,
    },
    PricingPreset {
        id: "rush-service",
        name: LocalizedText::new("Rush Service", "Service urgent", "Serviço urgente"),
        description: LocalizedText::new(
            "Completed within two business days",
            "Traité en deux jours ouvrables",
            "Concluído em dois dias úteis",
        ),
        amount: Cad::new(dec!(75.00)),
        category: PricingCategory::Addon,
        filing_type: None,
    },
];

/// Returns every preset in catalog order.
#[must_use]
pub fn all_presets() -> &'static [PricingPreset] {
    PRICING_PRESETS
}

/// Looks up a preset by id.
#[must_use]
pub fn get_pricing_preset(id: &str) -> Option<&'static PricingPreset> {
    PRICING_PRESETS.iter().find(|preset| preset.id == id)
}

/// Returns the localized preset name, or the raw id when unknown.
#[must_use]
pub fn get_pricing_name(id: &str, language: Language) -> String {
    get_pricing_preset(id).map_or_else(|| id.to_string(), |p| p.name.get(language).to_string())
}

/// Returns the localized preset description, or an empty string when unknown.
#[must_use]
pub fn get_pricing_description(id: &str, language: Language) -> String {
    get_pricing_preset(id)
        .map(|p| p.description.get(language).to_string())
        .unwrap_or_default()
}

/// Returns the presets listed under a category.
pub fn presets_by_category(
    category: PricingCategory,
) -> impl Iterator<Item = &'static PricingPreset> {
    PRICING_PRESETS
        .iter()
        .filter(move |preset| preset.category == category)
}

/// Returns the personal presets a household of the given shape can buy.
pub fn presets_for_filing_type(
    filing_type: FilingType,
) -> impl Iterator<Item = &'static PricingPreset> {
    presets_by_category(PricingCategory::Personal).filter(move |p| p.applies_to(filing_type))
}
