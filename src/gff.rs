use crate::record::PtRecord;
use std::io::{self, Write};

/// Threshold a value must reach to fall inside a region feature.
const REGION_THRESHOLD: f64 = 1.0;

/// Finds maximal runs of consecutive values >= 1.
///
/// Returns 1-based inclusive `(start, end)` spans aligned to the value
/// list. An isolated qualifying value yields a span of length 1; a run
/// still open at the end of the list is closed there.
pub fn value_regions(values: &[f64]) -> Vec<(usize, usize)> {
    let mut regions = Vec::new();
    let mut start: Option<usize> = None;

    for (i, &value) in values.iter().enumerate() {
        if value >= REGION_THRESHOLD {
            start.get_or_insert(i + 1);
        } else if let Some(s) = start.take() {
            regions.push((s, i));
        }
    }
    if let Some(s) = start {
        regions.push((s, values.len()));
    }

    regions
}

/// Makes a header usable as a GFF3 seqid by replacing whitespace with `_`.
///
/// GFF3 columns are tab-delimited, so an unsanitized header with embedded
/// whitespace would shift every downstream column.
pub fn sanitize_seqid(header: &str) -> String {
    header
        .chars()
        .map(|c| if c.is_whitespace() { '_' } else { c })
        .collect()
}

/// Renders a batch of records as one GFF3 document.
///
/// Emits the `##gff-version 3` preamble once, then for each record a
/// `##sequence-region` declaration, a full-span `gene` feature, a
/// full-span `CDS` feature whose `Parent` references the gene, and one
/// `region` feature per maximal run of values >= 1.
pub fn render<W: Write>(records: &[PtRecord], writer: &mut W) -> io::Result<()> {
    writeln!(writer, "##gff-version 3")?;
    for record in records {
        render_record(record, writer)?;
    }
    Ok(())
}

fn render_record<W: Write>(record: &PtRecord, writer: &mut W) -> io::Result<()> {
    let seqid = sanitize_seqid(&record.header);
    let length = record.sequence.len();

    writeln!(writer, "##sequence-region {} 1 {}", seqid, length)?;
    writeln!(
        writer,
        "{}\t.\tgene\t1\t{}\t.\t+\t.\tID=gene-{}",
        seqid, length, seqid
    )?;
    writeln!(
        writer,
        "{}\t.\tCDS\t1\t{}\t.\t+\t0\tID=cds-{};Parent=gene-{}",
        seqid, length, seqid, seqid
    )?;

    for (start, end) in value_regions(&record.values) {
        writeln!(
            writer,
            "{}\t.\tregion\t{}\t{}\t.\t+\t.\tID=region-{}-{};color=0,0,255",
            seqid, start, end, seqid, start
        )?;
    }

    Ok(())
}
