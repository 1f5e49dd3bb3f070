use std::io::{self, Write};

use account_model::{REPORT_HEADER, ValidationMessage};

/// The findings of one input file, headed by its file name.
#[derive(Debug, Clone, Copy)]
pub struct ReportGroup<'a> {
    pub file_name: &'a str,
    pub messages: &'a [ValidationMessage],
}

/// Writes the tab-separated validation report.
///
/// Each group is the file name, the column header, one line per message and
/// a blank separator line.
pub fn write_validation_report<W: Write>(writer: &mut W, groups: &[ReportGroup<'_>]) -> io::Result<()> {
    for group in groups {
        writeln!(writer, "{}", group.file_name)?;
        writeln!(writer, "{REPORT_HEADER}")?;
        for message in group.messages {
            writeln!(writer, "{message}")?;
        }
        writeln!(writer)?;
    }
    writer.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use account_model::{CellAddress, IssueKind};

    #[test]
    fn groups_are_separated_by_blank_lines() {
        let messages = vec![ValidationMessage::cell(
            "NU",
            "PA1",
            CellAddress::new(2, 2),
            "GENDER",
            IssueKind::InvalidFormat,
            "X",
        )];
        let groups = [
            ReportGroup {
                file_name: "clopidogrel.csv",
                messages: &messages,
            },
            ReportGroup {
                file_name: "noac.csv",
                messages: &[],
            },
        ];
        let mut buffer = Vec::new();
        write_validation_report(&mut buffer, &groups).expect("write report");
        let report = String::from_utf8(buffer).expect("utf-8 report");
        assert_eq!(
            report,
            "clopidogrel.csv\n\
             Site\tSubject ID\tCell Address\tField Name\tBad Value\n\
             NU\tPA1\tC2\tinvalid GENDER\tX\n\
             \n\
             noac.csv\n\
             Site\tSubject ID\tCell Address\tField Name\tBad Value\n\
             \n"
        );
    }
}
