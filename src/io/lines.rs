use anyhow::Result;
use std::io::BufRead;

/// 逐行读取：去掉行尾 `\n` / `\r\n`，空行保留为空序列。
pub fn read_lines<R: BufRead>(mut reader: R) -> Result<Vec<Vec<char>>> {
    let mut out = Vec::new();
    let mut buf = String::new();
    loop {
        buf.clear();
        let n = reader.read_line(&mut buf)?;
        if n == 0 {
            break;
        }
        let line = buf.strip_suffix('\n').unwrap_or(&buf);
        let line = line.strip_suffix('\r').unwrap_or(line);
        out.push(line.chars().collect());
    }
    Ok(out)
}
