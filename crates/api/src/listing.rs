//! Assembles one XMLTV listing from the catalog and the guide API.

use std::collections::HashSet;

use chrono::NaiveDate;
use npo2xml_core::channel::ChannelCatalog;
use npo2xml_core::program::filter_programs;
use npo2xml_core::time::guide_date;
use npo2xml_core::xmltv::XmltvWriter;
use npo2xml_guide::GuideApi;

use crate::error::AppResult;

/// Fetch every channel for `today` through `today + days_ahead` and render
/// the result.
///
/// Fetches run one after another. The first failing fetch aborts the whole
/// listing; no partial document is produced.
pub async fn build_listing(
    catalog: &ChannelCatalog,
    guide: &GuideApi,
    today: NaiveDate,
    days_ahead: u32,
) -> AppResult<Vec<u8>> {
    let mut doc = XmltvWriter::new()?;
    let mut programmes = 0usize;

    for channel in catalog {
        doc.write_channel(channel)?;

        let mut seen = HashSet::new();
        for offset in 0..=days_ahead {
            let date = guide_date(today, offset);
            let records = guide
                .fetch_day(&channel.guid, &date)
                .await
                .inspect_err(|err| {
                    tracing::error!(
                        channel = %channel.external_id,
                        date = %date,
                        error = %err,
                        "Guide fetch failed",
                    );
                })?;

            for program in filter_programs(records, &mut seen) {
                doc.write_programme(channel, &program)?;
                programmes += 1;
            }
        }
    }

    tracing::info!(
        channels = catalog.len(),
        days_ahead,
        programmes,
        "Listing built",
    );

    Ok(doc.finish()?)
}
