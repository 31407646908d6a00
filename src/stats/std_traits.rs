use super::{Counters, SearchStats};
use std::fmt::{Display, Formatter, Result, Write};

fn write_counters(f: &mut Formatter<'_>, buff: &mut itoa::Buffer, c: &Counters) -> Result {
    let fields = [
        c.pattern_bytes_read,
        c.text_bytes_read,
        c.lookups,
        c.writes,
        c.branches,
        c.verifications,
        c.jumps,
        c.computations,
    ];

    for field in fields {
        f.write_char('\t')?;
        f.write_str(buff.format(field))?;
    }
    Ok(())
}

/// Formats two tab-separated rows, one for the preprocessing counters and one
/// for the searching counters, in the column order given by
/// [`SearchStats::TSV_HEADER`]. The memory, lookup entry and extra metric
/// columns are repeated on both rows. Extra metrics are written as
/// `name=value` pairs joined by `;`.
impl Display for SearchStats {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let mut buff = itoa::Buffer::new();

        let rows = [("preprocessing", &self.preprocessing), ("searching", &self.searching)];
        for (row, (label, counters)) in rows.into_iter().enumerate() {
            if row > 0 {
                f.write_char('\n')?;
            }

            f.write_str(label)?;
            write_counters(f, &mut buff, counters)?;

            f.write_char('\t')?;
            f.write_str(buff.format(self.memory_used))?;
            for entries in self.lookup_entries {
                f.write_char('\t')?;
                f.write_str(buff.format(entries))?;
            }

            f.write_char('\t')?;
            if self.extra.is_empty() {
                f.write_char('-')?;
            }
            for (i, (name, value)) in self.extra.iter().enumerate() {
                if i > 0 {
                    f.write_char(';')?;
                }
                f.write_str(name)?;
                f.write_char('=')?;
                f.write_str(buff.format(value))?;
            }
        }

        Ok(())
    }
}
