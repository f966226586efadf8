// Documento Word (.docx) mínimo: un título y una tabla por partición.
use std::io::{Cursor, Write};

use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;
use zip::write::FileOptions;

use crate::error::Result;
use crate::export::GridTable;

const CONTENT_TYPES: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types"><Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/><Default Extension="xml" ContentType="application/xml"/><Override PartName="/word/document.xml" ContentType="application/vnd.openxmlformats-officedocument.wordprocessingml.document.main+xml"/></Types>"#;

const ROOT_RELS: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships"><Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="word/document.xml"/></Relationships>"#;

const WORDML_NS: &str = "http://schemas.openxmlformats.org/wordprocessingml/2006/main";

type XmlWriter = Writer<Cursor<Vec<u8>>>;

fn start(w: &mut XmlWriter, name: &str, attrs: &[(&str, &str)]) -> Result<()> {
    let el = BytesStart::new(name).with_attributes(attrs.iter().copied());
    w.write_event(Event::Start(el))?;
    Ok(())
}

fn empty(w: &mut XmlWriter, name: &str, attrs: &[(&str, &str)]) -> Result<()> {
    let el = BytesStart::new(name).with_attributes(attrs.iter().copied());
    w.write_event(Event::Empty(el))?;
    Ok(())
}

fn end(w: &mut XmlWriter, name: &str) -> Result<()> {
    w.write_event(Event::End(BytesEnd::new(name)))?;
    Ok(())
}

/// `<w:p>` con un único run; `bold` para títulos y encabezados.
fn paragraph(w: &mut XmlWriter, text: &str, bold: bool) -> Result<()> {
    start(w, "w:p", &[])?;
    start(w, "w:r", &[])?;
    if bold {
        start(w, "w:rPr", &[])?;
        empty(w, "w:b", &[])?;
        end(w, "w:rPr")?;
    }
    start(w, "w:t", &[("xml:space", "preserve")])?;
    w.write_event(Event::Text(BytesText::new(text)))?;
    end(w, "w:t")?;
    end(w, "w:r")?;
    end(w, "w:p")
}

fn table(w: &mut XmlWriter, rows: &[Vec<Vec<String>>]) -> Result<()> {
    start(w, "w:tbl", &[])?;
    start(w, "w:tblPr", &[])?;
    empty(w, "w:tblW", &[("w:w", "0"), ("w:type", "auto")])?;
    start(w, "w:tblBorders", &[])?;
    for side in ["w:top", "w:left", "w:bottom", "w:right", "w:insideH", "w:insideV"] {
        empty(w, side, &[("w:val", "single"), ("w:sz", "4"), ("w:space", "0"), ("w:color", "auto")])?;
    }
    end(w, "w:tblBorders")?;
    end(w, "w:tblPr")?;

    for (r, row) in rows.iter().enumerate() {
        start(w, "w:tr", &[])?;
        for lines in row {
            start(w, "w:tc", &[])?;
            // una línea por sesión; Word exige al menos un párrafo por celda
            if lines.is_empty() {
                paragraph(w, "", false)?;
            }
            for line in lines {
                paragraph(w, line, r == 0)?;
            }
            end(w, "w:tc")?;
        }
        end(w, "w:tr")?;
    }
    end(w, "w:tbl")
}

/// XML de `word/document.xml`.
pub fn document_xml(title: &str, tables: &[GridTable]) -> Result<Vec<u8>> {
    let mut w = Writer::new(Cursor::new(Vec::new()));
    w.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), Some("yes"))))?;
    start(&mut w, "w:document", &[("xmlns:w", WORDML_NS)])?;
    start(&mut w, "w:body", &[])?;

    paragraph(&mut w, title, true)?;
    for t in tables {
        if tables.len() > 1 {
            paragraph(&mut w, &t.title, true)?;
        }
        table(&mut w, &t.cells)?;
        paragraph(&mut w, "", false)?;
    }

    end(&mut w, "w:body")?;
    end(&mut w, "w:document")?;
    Ok(w.into_inner().into_inner())
}

/// Empaqueta el documento (.docx = zip con las partes OOXML mínimas).
pub fn write_tables_docx(title: &str, tables: &[GridTable]) -> Result<Vec<u8>> {
    let document = document_xml(title, tables)?;

    let mut zip = zip::ZipWriter::new(Cursor::new(Vec::new()));
    let opts = FileOptions::default().compression_method(zip::CompressionMethod::Deflated);

    zip.start_file("[Content_Types].xml", opts)?;
    zip.write_all(CONTENT_TYPES.as_bytes())?;
    zip.start_file("_rels/.rels", opts)?;
    zip.write_all(ROOT_RELS.as_bytes())?;
    zip.start_file("word/document.xml", opts)?;
    zip.write_all(&document)?;

    Ok(zip.finish()?.into_inner())
}
