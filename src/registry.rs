//! Variable catalog for template authoring
//!
//! The registry is the single source of truth for which placeholder
//! variables exist. It is built once at startup (builtin catalog, optionally
//! extended with user-defined variables from the catalog file) and never
//! mutated afterwards. Categories are non-unique grouping tags used by the
//! suggestion panel and the `vars` CLI command.

use serde::{Deserialize, Serialize};

/// A placeholder variable known to the catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Variable {
    /// Key as typed inside a token, e.g. "buyerName" in `{{buyerName}}`
    pub key: String,
    /// Human-readable label shown in the suggestion panel
    pub label: String,
    /// Example value shown next to the label
    pub example: String,
    /// Grouping tag, e.g. "Property"
    pub category: String,
}

impl Variable {
    pub fn new(key: &str, label: &str, example: &str, category: &str) -> Self {
        Self {
            key: key.to_string(),
            label: label.to_string(),
            example: example.to_string(),
            category: category.to_string(),
        }
    }

    /// The token text inserted into a document for this variable
    pub fn token(&self) -> String {
        format!("{{{{{}}}}}", self.key)
    }
}

/// A category with its variables, in catalog order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariableGroup {
    pub category: String,
    pub variables: Vec<Variable>,
}

/// Builtin catalog entry (static storage, converted on registry construction)
struct BuiltinVariable {
    key: &'static str,
    label: &'static str,
    example: &'static str,
    category: &'static str,
}

#[rustfmt::skip]
const BUILTIN_VARIABLES: &[BuiltinVariable] = &[
    // Contact
    BuiltinVariable { key: "buyerName",       label: "Buyer Name",         example: "Jordan Miles",           category: "Contact" },
    BuiltinVariable { key: "sellerName",      label: "Seller Name",        example: "Casey Brennan",          category: "Contact" },
    BuiltinVariable { key: "clientFirstName", label: "Client First Name",  example: "Jordan",                 category: "Contact" },
    BuiltinVariable { key: "clientLastName",  label: "Client Last Name",   example: "Miles",                  category: "Contact" },
    BuiltinVariable { key: "clientPhone",     label: "Client Phone",       example: "(555) 201-4477",         category: "Contact" },
    BuiltinVariable { key: "clientEmail",     label: "Client Email",       example: "jordan@example.com",     category: "Contact" },
    // Property
    BuiltinVariable { key: "propertyAddress", label: "Property Address",   example: "114 Alder Court",        category: "Property" },
    BuiltinVariable { key: "propertyCity",    label: "Property City",      example: "Lakewood",               category: "Property" },
    BuiltinVariable { key: "propertyZip",     label: "Property ZIP",       example: "80215",                  category: "Property" },
    BuiltinVariable { key: "listPrice",       label: "List Price",         example: "$485,000",               category: "Property" },
    BuiltinVariable { key: "mlsNumber",       label: "MLS Number",         example: "MLS-2214907",            category: "Property" },
    // Agent
    BuiltinVariable { key: "agentName",       label: "Agent Name",         example: "Sam Ortega",             category: "Agent" },
    BuiltinVariable { key: "agentPhone",      label: "Agent Phone",        example: "(555) 640-9921",         category: "Agent" },
    BuiltinVariable { key: "agentEmail",      label: "Agent Email",        example: "sam@stencilrealty.com",  category: "Agent" },
    BuiltinVariable { key: "officeName",      label: "Office Name",        example: "Stencil Realty Group",   category: "Agent" },
    // Dates
    BuiltinVariable { key: "todayDate",       label: "Today's Date",       example: "August 5, 2026",         category: "Dates" },
    BuiltinVariable { key: "closingDate",     label: "Closing Date",       example: "September 12, 2026",     category: "Dates" },
    BuiltinVariable { key: "inspectionDate",  label: "Inspection Date",    example: "August 19, 2026",        category: "Dates" },
    BuiltinVariable { key: "offerExpiration", label: "Offer Expiration",   example: "August 8, 2026 5:00 PM", category: "Dates" },
    // Financial
    BuiltinVariable { key: "earnestMoney",    label: "Earnest Money",      example: "$5,000",                 category: "Financial" },
    BuiltinVariable { key: "loanAmount",      label: "Loan Amount",        example: "$388,000",               category: "Financial" },
];

/// Immutable variable catalog
#[derive(Debug, Clone)]
pub struct Registry {
    variables: Vec<Variable>,
}

impl Registry {
    /// The builtin CRM catalog
    pub fn builtin() -> Self {
        Self {
            variables: BUILTIN_VARIABLES
                .iter()
                .map(|v| Variable::new(v.key, v.label, v.example, v.category))
                .collect(),
        }
    }

    /// Builtin catalog extended with user-defined variables.
    ///
    /// Duplicate keys keep the first definition (builtin wins), so `get`
    /// stays deterministic no matter what the user catalog contains.
    pub fn with_custom(custom: Vec<Variable>) -> Self {
        let mut registry = Self::builtin();
        for var in custom {
            if registry.get(&var.key).is_some() {
                tracing::debug!(key = %var.key, "skipping duplicate catalog key");
                continue;
            }
            registry.variables.push(var);
        }
        registry
    }

    /// Catalog from an explicit variable list (tests, embedding hosts)
    pub fn from_variables(variables: Vec<Variable>) -> Self {
        Self { variables }
    }

    /// All variables in catalog order
    pub fn all(&self) -> &[Variable] {
        &self.variables
    }

    /// Exact-key lookup
    pub fn get(&self, key: &str) -> Option<&Variable> {
        self.variables.iter().find(|v| v.key == key)
    }

    pub fn len(&self) -> usize {
        self.variables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }

    /// Group variables by category.
    ///
    /// Groups appear in first-seen category order and members keep catalog
    /// order, so the same catalog always groups identically.
    pub fn by_category(&self) -> Vec<VariableGroup> {
        let mut groups: Vec<VariableGroup> = Vec::new();
        for var in &self.variables {
            match groups.iter_mut().find(|g| g.category == var.category) {
                Some(group) => group.variables.push(var.clone()),
                None => groups.push(VariableGroup {
                    category: var.category.clone(),
                    variables: vec![var.clone()],
                }),
            }
        }
        groups
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::builtin()
    }
}
