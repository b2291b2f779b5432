//! XMLTV document writer.
//!
//! Elements are written in the order the caller hands them over; nothing is
//! buffered or reordered. A document is a `tv` root holding, per channel, a
//! `channel` block followed by that channel's `programme` blocks.

use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;

use crate::channel::Channel;
use crate::error::CoreError;
use crate::program::ProgramRecord;
use crate::time::format_timestamp;

pub const GENERATOR_INFO_URL: &str = "https://github.com/NoahvdAa/NPO2XML";
pub const GENERATOR_INFO_NAME: &str = "NPO2XML";
pub const SOURCE_INFO_URL: &str = "https://npo.nl/start/live";
pub const SOURCE_INFO_NAME: &str = "NPO";

/// Language tag on every text element.
const LANG: &str = "nl";

pub struct XmltvWriter {
    writer: Writer<Vec<u8>>,
}

impl XmltvWriter {
    /// Start a document: declaration, doctype and the opening `tv` tag.
    pub fn new() -> Result<Self, CoreError> {
        let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);

        writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
        writer.write_event(Event::DocType(BytesText::from_escaped(
            r#"tv SYSTEM "xmltv.dtd""#,
        )))?;
        writer.write_event(Event::Start(BytesStart::new("tv").with_attributes([
            ("generator-info-url", GENERATOR_INFO_URL),
            ("generator-info-name", GENERATOR_INFO_NAME),
            ("source-info-url", SOURCE_INFO_URL),
            ("source-info-name", SOURCE_INFO_NAME),
        ])))?;

        Ok(Self { writer })
    }

    pub fn write_channel(&mut self, channel: &Channel) -> Result<(), CoreError> {
        self.writer.write_event(Event::Start(
            BytesStart::new("channel").with_attributes([("id", channel.external_id.as_str())]),
        ))?;
        self.lang_text("display-name", &channel.title)?;
        self.empty("icon", &channel.logo)?;
        self.writer.write_event(Event::End(BytesEnd::new("channel")))?;
        Ok(())
    }

    /// Write one `programme` block for an already filtered record.
    pub fn write_programme(
        &mut self,
        channel: &Channel,
        program: &ProgramRecord,
    ) -> Result<(), CoreError> {
        let start = format_timestamp(&program.program_start, false);
        let stop = format_timestamp(&program.program_end, false);

        self.writer.write_event(Event::Start(BytesStart::new("programme").with_attributes([
            ("start", start.as_str()),
            ("stop", stop.as_str()),
            ("channel", channel.external_id.as_str()),
        ])))?;

        self.lang_text("title", program.title().unwrap_or_default())?;
        if let Some(desc) = program.description() {
            self.lang_text("desc", desc)?;
        }
        self.text("date", &format_timestamp(&program.program_start, true))?;
        for category in program.categories() {
            self.lang_text("category", category)?;
        }
        for url in program.icon_urls() {
            self.empty("icon", url)?;
        }

        self.writer.write_event(Event::End(BytesEnd::new("programme")))?;
        Ok(())
    }

    /// Close the root element and hand back the serialized document.
    pub fn finish(mut self) -> Result<Vec<u8>, CoreError> {
        self.writer.write_event(Event::End(BytesEnd::new("tv")))?;
        Ok(self.writer.into_inner())
    }

    fn lang_text(&mut self, name: &str, text: &str) -> Result<(), CoreError> {
        self.writer
            .write_event(Event::Start(BytesStart::new(name).with_attributes([("lang", LANG)])))?;
        self.writer.write_event(Event::Text(BytesText::new(text)))?;
        self.writer.write_event(Event::End(BytesEnd::new(name)))?;
        Ok(())
    }

    fn text(&mut self, name: &str, text: &str) -> Result<(), CoreError> {
        self.writer.write_event(Event::Start(BytesStart::new(name)))?;
        self.writer.write_event(Event::Text(BytesText::new(text)))?;
        self.writer.write_event(Event::End(BytesEnd::new(name)))?;
        Ok(())
    }

    fn empty(&mut self, name: &str, src: &str) -> Result<(), CoreError> {
        self.writer
            .write_event(Event::Empty(BytesStart::new(name).with_attributes([("src", src)])))?;
        Ok(())
    }
}
