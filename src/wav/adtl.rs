//! Associated data list (`LIST`/`adtl`) parsing.

use crate::metadata::ParsedMetadata;
use crate::metadata::models::LabelRange;
use crate::wav::chunk::{FourCc, SubChunks, decode_text};
use crate::wav::error::WavResult;
use crate::wav::models::LabelledTextHeader;
use crate::wav::parser::parse_label;
use binrw::BinRead;
use log::debug;
use std::io::Cursor;

const MIN_LABEL_SIZE: u32 = 4;
const MIN_LTXT_SIZE: u32 = LabelledTextHeader::SIZE as u32;

/// Parses a `LIST` payload into `metadata`.
///
/// The list type is not checked, any list whose sub-chunks look like `labl`, `note` or `ltxt`
/// contributes.
pub fn parse_list(payload: &[u8], metadata: &mut ParsedMetadata) -> WavResult<()> {
    let Some((list_type, sub_chunks)) = payload.split_first_chunk::<4>() else {
        return Ok(());
    };
    let list_type = FourCc(*list_type);
    if list_type != FourCc::ADTL {
        debug!("Scanning LIST of type \"{list_type}\"");
    }

    for sub_chunk in SubChunks::new(sub_chunks) {
        match sub_chunk.id {
            FourCc::LABL | FourCc::NOTE if sub_chunk.size >= MIN_LABEL_SIZE => {
                let Some(label) = parse_label(sub_chunk.data) else {
                    continue;
                };
                if sub_chunk.id == FourCc::LABL {
                    metadata.add_list_label(label);
                } else {
                    metadata.add_note(label);
                }
            }
            FourCc::LTXT if sub_chunk.size >= MIN_LTXT_SIZE => {
                if let Some(range) = parse_labelled_text(sub_chunk.data)? {
                    metadata.add_label_range(range);
                }
            }
            _ => {}
        }
    }

    Ok(())
}

/// An `ltxt` payload: header then text. `None` if the header is cut short.
pub fn parse_labelled_text(data: &[u8]) -> WavResult<Option<LabelRange>> {
    if data.len() < LabelledTextHeader::SIZE {
        return Ok(None);
    }

    let header = LabelledTextHeader::read(&mut Cursor::new(data))?;
    Ok(Some(LabelRange {
        id: header.cue_id,
        sample_length: header.sample_length,
        text: decode_text(&data[LabelledTextHeader::SIZE..]),
    }))
}
