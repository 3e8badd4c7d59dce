use crate::error::Result;
use crate::models::Listing;
use crate::services::traits::InsightGenerator;
use async_trait::async_trait;
use tracing::debug;

const PLACEHOLDER_INSIGHTS: [&str; 4] = [
    "En uygun fiyatlı seçenek ikinci ev.",
    "İlk ev ulaşım açısından en avantajlı konumda.",
    "Üçüncü ev en yeni binada bulunuyor.",
    "Günlük toplam maliyet açısından karşılaştırma yapıldığında...",
];

/// Placeholder generator: the same four strings whatever is compared
#[derive(Debug, Clone, Copy, Default)]
pub struct CannedInsights;

#[async_trait]
impl InsightGenerator for CannedInsights {
    async fn insights(&self, listings: &[Listing]) -> Result<Vec<String>> {
        debug!("Returning canned insights for {} listings", listings.len());
        Ok(PLACEHOLDER_INSIGHTS.iter().map(|s| s.to_string()).collect())
    }

    fn provider_name(&self) -> &'static str {
        "canned"
    }
}
