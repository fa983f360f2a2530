//! Audio Sample Modal Component
//!
//! Player for a book's audio sample: play/pause, ±10 s skip, draggable
//! progress bar, mute and volume, playback speed.
//!
//! The `<audio>` element lives outside the `<Show>` so closing the modal can
//! pause it; a detached media element keeps playing otherwise.

use leptos::ev;
use leptos::html::{Audio, Div};
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_seekdrag::{bind_global_seek, create_seek_signals, end_seek, make_on_pointerdown, SeekListeners};
use wasm_bindgen_futures::JsFuture;

use super::hooks::{use_modal_keys, use_scroll_lock};
use crate::keys::{audio_key, ModalKey};
use crate::media::{speed_label, PlayerState, PLAYBACK_SPEEDS, SKIP_SECONDS, VOLUME_STEP};

#[component]
pub fn AudioSampleModal(
    #[prop(into)] open: Signal<bool>,
    #[prop(into)] on_close: Callback<()>,
    /// Full URL of the sample, `None` when the book has none
    #[prop(into)] audio_url: Signal<Option<String>>,
    #[prop(into)] book_title: String,
) -> impl IntoView {
    let audio_ref = NodeRef::<Audio>::new();
    let track_ref = NodeRef::<Div>::new();
    let player = RwSignal::new(PlayerState::default());
    let (show_speeds, set_show_speeds) = signal(false);
    let seek = create_seek_signals();

    use_scroll_lock(open);

    // Stop playback whenever the modal closes
    Effect::new(move |_| {
        if !open.get() {
            if let Some(audio) = audio_ref.get_untracked() {
                let _ = audio.pause();
            }
            end_seek(&seek);
            player.update(PlayerState::stop);
            set_show_speeds.set(false);
        }
    });

    // ========================
    // Element Control
    // ========================

    // `playing` follows the element's play/pause events; a rejected play()
    // promise (autoplay policy, bad source) leaves it false
    let toggle_play = move || {
        let Some(audio) = audio_ref.get_untracked() else { return };
        if player.with_untracked(|p| p.playing) {
            let _ = audio.pause();
            return;
        }
        match audio.play() {
            Ok(promise) => spawn_local(async move {
                if let Err(e) = JsFuture::from(promise).await {
                    log::warn!("[AUDIO] play() rejected: {:?}", e);
                    player.update(PlayerState::on_pause);
                }
            }),
            Err(e) => log::warn!("[AUDIO] play() failed: {:?}", e),
        }
    };

    let skip = move |delta: f64| {
        let Some(audio) = audio_ref.get_untracked() else { return };
        let mut state = player.get_untracked();
        audio.set_current_time(state.skip(audio.current_time(), delta));
        player.set(state);
    };

    let apply_volume = move |change: &dyn Fn(&mut PlayerState)| {
        let mut state = player.get_untracked();
        change(&mut state);
        if let Some(audio) = audio_ref.get_untracked() {
            audio.set_volume(state.effective_volume());
        }
        player.set(state);
    };

    let set_speed = move |rate: f64| {
        let mut state = player.get_untracked();
        let rate = state.set_playback_rate(rate);
        if let Some(audio) = audio_ref.get_untracked() {
            audio.set_playback_rate(rate);
        }
        player.set(state);
        set_show_speeds.set(false);
    };

    use_modal_keys(
        open,
        audio_key,
        Callback::new(move |key: ModalKey| match key {
            ModalKey::Close => on_close.run(()),
            ModalKey::TogglePlay => toggle_play(),
            ModalKey::SkipBack => skip(-SKIP_SECONDS),
            ModalKey::SkipForward => skip(SKIP_SECONDS),
            ModalKey::VolumeUp => apply_volume(&|p| {
                p.adjust_volume(VOLUME_STEP);
            }),
            ModalKey::VolumeDown => apply_volume(&|p| {
                p.adjust_volume(-VOLUME_STEP);
            }),
            _ => {}
        }),
    );

    // ========================
    // Progress Bar Seeking
    // ========================

    let on_seek = Callback::new(move |fraction: f64| {
        let mut state = player.get_untracked();
        state.dragging = true;
        let time = state.seek_fraction(fraction);
        if let Some(audio) = audio_ref.get_untracked() {
            audio.set_current_time(time);
        }
        player.set(state);
    });
    let on_release = Callback::new(move |_fraction: f64| {
        player.update(|p| p.dragging = false);
    });
    let on_pointerdown = make_on_pointerdown(seek, on_seek);

    let seek_listeners = StoredValue::new(None::<SeekListeners>);
    Effect::new(move |_| {
        let is_open = open.get();
        if let Some(listeners) = seek_listeners.try_update_value(|slot| slot.take()).flatten() {
            listeners.remove();
        }
        if is_open {
            let listeners = bind_global_seek(seek, track_ref, on_seek, on_release);
            seek_listeners.set_value(Some(listeners));
        }
    });
    on_cleanup(move || {
        if let Some(listeners) = seek_listeners.try_update_value(|slot| slot.take()).flatten() {
            listeners.remove();
        }
    });

    // ========================
    // Media Events
    // ========================

    let on_time_update = move |_: ev::Event| {
        if let Some(audio) = audio_ref.get_untracked() {
            player.update(|p| p.on_time_update(audio.current_time()));
        }
    };
    let on_loaded = move |_: ev::Event| {
        if let Some(audio) = audio_ref.get_untracked() {
            player.update(|p| p.on_loaded_metadata(audio.duration()));
        }
    };

    view! {
        <audio
            node_ref=audio_ref
            preload="metadata"
            src=move || audio_url.get().unwrap_or_default()
            on:timeupdate=on_time_update
            on:loadedmetadata=on_loaded
            on:play=move |_| player.update(PlayerState::on_play)
            on:pause=move |_| player.update(PlayerState::on_pause)
            on:ended=move |_| player.update(PlayerState::on_pause)
        ></audio>

        <Show when=move || open.get() && audio_url.with(Option::is_some)>
            <div class="audio-overlay">
                <div class="audio-modal">
                    <div class="audio-header">
                        <div>
                            <h2>"Nghe thử audio"</h2>
                            <p class="audio-subtitle">{format!("Sách: {}", book_title)}</p>
                        </div>
                        <button class="audio-close" aria-label="Đóng" on:click=move |_| on_close.run(())>
                            "✕"
                        </button>
                    </div>

                    <div class="audio-body">
                        <div class="audio-progress">
                            <div class="audio-times">
                                <span>{move || player.with(PlayerState::elapsed_label)}</span>
                                <span>{move || player.with(PlayerState::remaining_label)}</span>
                            </div>
                            <div class="audio-track" node_ref=track_ref on:pointerdown=on_pointerdown>
                                <div
                                    class="audio-fill"
                                    style:width=move || format!("{}%", player.with(PlayerState::progress_percent))
                                ></div>
                                <div
                                    class="audio-handle"
                                    class:dragging=move || seek.dragging_read.get()
                                    style:left=move || {
                                        format!("calc({}% - 10px)", player.with(PlayerState::progress_percent))
                                    }
                                ></div>
                            </div>
                        </div>

                        <div class="audio-controls">
                            <button class="audio-skip" title="Lùi 10s" on:click=move |_| skip(-SKIP_SECONDS)>
                                "⏪"
                            </button>
                            <button class="audio-play" on:click=move |_| toggle_play()>
                                {move || if player.with(|p| p.playing) { "⏸" } else { "▶" }}
                            </button>
                            <button class="audio-skip" title="Tới 10s" on:click=move |_| skip(SKIP_SECONDS)>
                                "⏩"
                            </button>
                        </div>

                        <div class="audio-volume">
                            <button
                                class="audio-mute"
                                title=move || if player.with(|p| p.muted) { "Bật tiếng" } else { "Tắt tiếng" }
                                on:click=move |_| apply_volume(&|p| {
                                    p.toggle_mute();
                                })
                            >
                                {move || if player.with(|p| p.muted || p.volume == 0.0) { "🔇" } else { "🔊" }}
                            </button>
                            <input
                                type="range"
                                min="0"
                                max="1"
                                step="0.05"
                                prop:value=move || player.with(PlayerState::effective_volume).to_string()
                                on:input=move |ev| {
                                    let value = event_target_value(&ev).parse::<f64>().unwrap_or(0.0);
                                    apply_volume(&|p| {
                                        p.set_volume(value);
                                    });
                                }
                            />
                            <span class="audio-volume-value">
                                {move || format!("{}", (player.with(PlayerState::effective_volume) * 100.0).round())}
                            </span>
                        </div>

                        <div class="audio-speed">
                            <button class="audio-speed-toggle" on:click=move |_| set_show_speeds.update(|v| *v = !*v)>
                                {move || speed_label(player.with(|p| p.playback_rate))}
                            </button>
                            <Show when=move || show_speeds.get()>
                                <div class="audio-speed-menu">
                                    <div class="audio-speed-title">"Tốc độ phát"</div>
                                    {PLAYBACK_SPEEDS
                                        .iter()
                                        .map(|&rate| {
                                            view! {
                                                <button
                                                    class="audio-speed-option"
                                                    class:active=move || player.with(|p| p.playback_rate == rate)
                                                    on:click=move |_| set_speed(rate)
                                                >
                                                    {speed_label(rate)}
                                                    {(rate == 1.0).then_some(" (Bình thường)")}
                                                </button>
                                            }
                                        })
                                        .collect_view()}
                                </div>
                            </Show>
                        </div>

                        <div class="audio-hints">
                            <span>"Space: Phát/Tạm dừng"</span>
                            <span>"← →: Bỏ qua 10s"</span>
                            <span>"↑ ↓: Âm lượng"</span>
                            <span>"ESC: Đóng"</span>
                        </div>
                    </div>
                </div>
            </div>
        </Show>
    }
}
