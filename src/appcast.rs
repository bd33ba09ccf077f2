//! Sparkle appcast serialization
//!
//! Turns a [FeedDocument] into RSS 2.0 with the `sparkle:` extension namespace:
//! channel metadata first, then one `<item>` per release carrying the build number
//! twice (`<sparkle:version>` and the enclosure's `sparkle:version` attribute).

use std::fs;
use std::path::Path;

use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;

use crate::error::Result;
use crate::feed::{FeedDocument, FeedItem};

pub const SPARKLE_NAMESPACE: &str = "http://www.andymatuschak.org/xml-namespaces/sparkle";

type XmlWriter = Writer<Vec<u8>>;

/// Render the document as an indented XML string
pub fn render_appcast(document: &FeedDocument) -> Result<String> {
    let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);

    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), Some("yes"))))?;

    let mut rss = BytesStart::new("rss");
    rss.push_attribute(("version", "2.0"));
    rss.push_attribute(("xmlns:sparkle", SPARKLE_NAMESPACE));
    writer.write_event(Event::Start(rss))?;
    writer.write_event(Event::Start(BytesStart::new("channel")))?;

    let channel = &document.channel;
    write_text_element(&mut writer, "title", &channel.title)?;
    write_text_element(&mut writer, "description", &channel.description)?;
    write_text_element(&mut writer, "language", &channel.language)?;
    write_text_element(&mut writer, "link", &channel.link)?;

    for item in &document.items {
        write_item(&mut writer, item)?;
    }

    writer.write_event(Event::End(BytesEnd::new("channel")))?;
    writer.write_event(Event::End(BytesEnd::new("rss")))?;

    let mut xml = String::from_utf8(writer.into_inner())?;
    xml.push('\n');
    Ok(xml)
}

/// Render and write the appcast to `path`, replacing any previous file
pub fn write_appcast(document: &FeedDocument, path: &Path) -> Result<()> {
    let xml = render_appcast(document)?;
    fs::write(path, xml)?;
    Ok(())
}

fn write_item(writer: &mut XmlWriter, item: &FeedItem) -> Result<()> {
    let build_number = item.build_number.to_string();
    let length = item.length.to_string();

    writer.write_event(Event::Start(BytesStart::new("item")))?;
    write_text_element(writer, "title", &item.title)?;
    write_text_element(writer, "link", &item.link)?;
    write_text_element(writer, "sparkle:version", &build_number)?;
    write_text_element(writer, "sparkle:shortVersionString", &item.short_version)?;
    write_text_element(writer, "sparkle:releaseNotesLink", &item.release_notes_link)?;
    write_text_element(writer, "pubDate", &item.pub_date)?;

    let mut enclosure = BytesStart::new("enclosure");
    enclosure.push_attribute(("url", item.download_url.as_str()));
    enclosure.push_attribute(("sparkle:version", build_number.as_str()));
    enclosure.push_attribute(("sparkle:edSignature", item.signature.as_str()));
    enclosure.push_attribute(("length", length.as_str()));
    writer.write_event(Event::Empty(enclosure))?;

    writer.write_event(Event::End(BytesEnd::new("item")))?;
    Ok(())
}

fn write_text_element(writer: &mut XmlWriter, name: &str, text: &str) -> Result<()> {
    writer.write_event(Event::Start(BytesStart::new(name)))?;
    writer.write_event(Event::Text(BytesText::new(text)))?;
    writer.write_event(Event::End(BytesEnd::new(name)))?;
    Ok(())
}
