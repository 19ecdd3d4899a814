use super::types::SparqlResponse;

/// Wikidata class for "city"; subclasses are followed transitively.
const CITY_CLASS: &str = "wd:Q515";

/// SPARQL selecting the `lang` Wikipedia article of every city.
pub fn build_query(lang: &str) -> String {
    format!(
        "SELECT ?article WHERE {{\n\
         ?city wdt:P31/wdt:P279* {CITY_CLASS} .\n\
         ?article schema:about ?city ;\n\
         schema:isPartOf <https://{lang}.wikipedia.org/> .\n\
         SERVICE wikibase:label {{ bd:serviceParam wikibase:language \"{lang}\" . }}\n\
         }}"
    )
}

/// Last path segment of each article URL, in binding order. Escapes are kept.
pub fn extract_names(response: &SparqlResponse) -> Vec<String> {
    response
        .results
        .bindings
        .iter()
        .map(|b| last_segment(&b.article.value).to_string())
        .collect()
}

fn last_segment(url: &str) -> &str {
    url.rsplit('/').next().unwrap_or(url)
}
