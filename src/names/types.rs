use serde::Deserialize;

/// SPARQL JSON results: `{results: {bindings: [{article: {value}}]}}`.
#[derive(Debug, Deserialize)]
pub struct SparqlResponse {
    pub results: SparqlResults,
}

#[derive(Debug, Deserialize)]
pub struct SparqlResults {
    pub bindings: Vec<Binding>,
}

#[derive(Debug, Deserialize)]
pub struct Binding {
    pub article: BindingValue,
}

#[derive(Debug, Deserialize)]
pub struct BindingValue {
    pub value: String,
}
