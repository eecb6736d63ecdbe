//! Prompt templates. Every template ends with the language instruction.

use recap_core::models::language::language_instruction;

/// Divider placed before each per-scene summary (scene numbers are 1-based).
pub fn scene_divider(number: usize) -> String {
    format!("———— Scene {number} ————")
}

fn title(movie: &str) -> &str {
    if movie.trim().is_empty() {
        "Unknown"
    } else {
        movie
    }
}

/// Opening line of the combined summary; its tokens count against the budget
/// of every scene.
pub fn intro(movie: &str) -> String {
    format!("The movie \"{}\" begins with the scene...\n\n", title(movie))
}

/// Prompt for one scene, carrying everything summarized so far.
pub fn scene_prompt(
    movie: &str,
    scene_number: usize,
    context_so_far: &str,
    scene_text: &str,
    language: &str,
) -> String {
    format!(
        "You are a professional movie assistant summarizing scenes of the film \"{movie}\".\n\
         \n\
         This is Scene {scene_number}.\n\
         \n\
         Instructions:\n\
         - Mention the location only when it is new or relevant.\n\
         - Use short character names unless a full name is needed for clarity.\n\
         - Do not repeat what earlier scenes already established.\n\
         - Describe concrete actions, decisions and arguments.\n\
         - Write 3-6 clear, cinematic sentences.\n\
         - Narrate what happens; do not add commentary or quote dialogue.\n\
         \n\
         Context so far:\n\
         {context_so_far}\n\
         \n\
         Current Scene:\n\
         \"\"\"\n\
         {scene_text}\n\
         \"\"\"\n\
         \n\
         {instruction}\n",
        movie = title(movie),
        instruction = language_instruction(language),
    )
}

/// Prompt merging all per-scene summaries, dividers included.
pub fn combine_prompt(movie: &str, scene_summaries: &[String], language: &str) -> String {
    format!(
        "Combine all of these scene descriptions into a single structured summary.\n\
         \n\
         Each scene must:\n\
         - Begin with its divider exactly as given, e.g. \"{example}\"\n\
         - Be vivid but not repetitive\n\
         - Follow a natural narrative progression\n\
         \n\
         Introduction:\n\
         {intro}\
         Scenes:\n\
         {scenes}\n\
         \n\
         {instruction}\n",
        example = scene_divider(1),
        intro = intro(movie),
        scenes = scene_summaries.join("\n"),
        instruction = language_instruction(language),
    )
}

/// Stateless prompt for a batch of consecutive scenes.
pub fn chunk_prompt(movie: &str, chunk_text: &str, language: &str) -> String {
    format!(
        "You are a professional movie assistant. Write a short, coherent third-person \
         summary of what happens in these scenes: key actions, settings, character \
         interactions and developments. Do not quote or copy the dialogue.\n\
         \n\
         Movie: {movie}\n\
         Scenes:\n\
         \"\"\"\n\
         {chunk_text}\n\
         \"\"\"\n\
         \n\
         {instruction}\n",
        movie = title(movie),
        instruction = language_instruction(language),
    )
}
