use std::fmt::Write;

use cube_scene::DrawCommand;

/// Renders a recorded command log as human readable text, one command per line.
/// Matrix uniforms are printed as four rows below the command.
pub fn summarize(commands: &[DrawCommand]) -> String {
    let mut out = String::new();
    write_commands(&mut out, commands).expect("formatting into a String is infallible");

    out
}

fn write_commands(out: &mut String, commands: &[DrawCommand]) -> std::fmt::Result {
    for command in commands {
        match command {
            DrawCommand::UploadMesh {
                vertex_count,
                stride,
                index_count,
                ..
            } => writeln!(
                out,
                "upload_mesh vertices={vertex_count} stride={stride} indices={index_count}"
            )?,
            DrawCommand::Resize(size) => writeln!(out, "resize {}x{}", size.width, size.height)?,
            DrawCommand::Clear { color } => writeln!(out, "clear {color:?}")?,
            DrawCommand::SetUniform(upload) => {
                writeln!(out, "set_uniform {} ({})", upload.name, upload.kind)?;
                write_matrix_rows(out, &upload.data)?;
            }
            DrawCommand::DrawIndexed { index_count } => {
                writeln!(out, "draw_indexed {index_count}")?
            }
        }
    }

    Ok(())
}

// `data` is column-major, print it the way it reads on paper
fn write_matrix_rows(out: &mut String, data: &[f32; 16]) -> std::fmt::Result {
    for row in 0..4 {
        writeln!(
            out,
            "    [{:>9.4} {:>9.4} {:>9.4} {:>9.4}]",
            data[row],
            data[4 + row],
            data[8 + row],
            data[12 + row]
        )?;
    }

    Ok(())
}
